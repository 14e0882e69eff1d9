use std::sync::Arc;

use futures::{StreamExt, stream::BoxStream};

use crate::application::paths::SitePaths;
use crate::application::ports::time::Clock;
use crate::domain::branch::{BranchCatalog, CatalogKind, PageWindow};
use crate::domain::errors::DomainResult;

/// Site-wide settings the sitemap documents are rendered with.
#[derive(Debug, Clone)]
pub struct SitemapSettings {
    /// Absolute origin without a trailing slash, e.g. `https://ifsclookup.in`.
    pub base_url: String,
    pub page_size: u32,
}

pub struct SitemapQueryService {
    pub(super) catalog: Arc<dyn BranchCatalog>,
    pub(super) paths: SitePaths,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: SitemapSettings,
}

impl SitemapQueryService {
    pub fn new(
        catalog: Arc<dyn BranchCatalog>,
        paths: SitePaths,
        clock: Arc<dyn Clock>,
        settings: SitemapSettings,
    ) -> Self {
        Self {
            catalog,
            paths,
            clock,
            settings,
        }
    }

    pub(super) fn absolute(&self, path: &str) -> String {
        format!("{}{path}", self.settings.base_url)
    }

    /// Lazily enumerate the absolute URLs of `kind`, optionally sliced.
    ///
    /// Entries whose names slugify to nothing are skipped since they have no
    /// addressable page.
    pub fn entries(
        &self,
        kind: CatalogKind,
        window: Option<PageWindow>,
    ) -> BoxStream<'static, DomainResult<String>> {
        let paths = self.paths.clone();
        let base_url = self.settings.base_url.clone();

        self.catalog
            .stream_entries(kind, window)
            .filter_map(move |next| {
                let location = match next {
                    Ok(entry) => paths
                        .entry_path(&entry)
                        .map(|path| Ok(format!("{base_url}{path}"))),
                    Err(err) => Some(Err(err)),
                };
                futures::future::ready(location)
            })
            .boxed()
    }
}
