// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        paths::SitePaths,
        ports::{ClockPort, SlugGeneratorPort},
        queries::{
            branches::BranchQueryService,
            sitemap::{SitemapQueryService, SitemapSettings},
        },
    },
    domain::{branch::BranchCatalog, hierarchy::SlugResolver},
};

pub struct ApplicationServices {
    pub branch_queries: Arc<BranchQueryService>,
    pub sitemap_queries: Arc<SitemapQueryService>,
}

impl ApplicationServices {
    pub fn new(
        catalog: Arc<dyn BranchCatalog>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        sitemap: SitemapSettings,
    ) -> Self {
        let paths = SitePaths::new(Arc::clone(&slugger));
        let resolver = Arc::new(SlugResolver::new(
            Arc::clone(&catalog),
            Arc::clone(&slugger),
        ));

        let branch_queries = Arc::new(BranchQueryService::new(
            Arc::clone(&catalog),
            Arc::clone(&resolver),
            paths.clone(),
        ));

        let sitemap_queries = Arc::new(SitemapQueryService::new(
            Arc::clone(&catalog),
            paths,
            Arc::clone(&clock),
            sitemap,
        ));

        Self {
            branch_queries,
            sitemap_queries,
        }
    }
}
