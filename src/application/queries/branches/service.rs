use std::sync::Arc;

use crate::application::paths::SitePaths;
use crate::domain::branch::BranchCatalog;
use crate::domain::hierarchy::SlugResolver;

pub struct BranchQueryService {
    pub(super) catalog: Arc<dyn BranchCatalog>,
    pub(super) resolver: Arc<SlugResolver>,
    pub(super) paths: SitePaths,
}

impl BranchQueryService {
    pub fn new(
        catalog: Arc<dyn BranchCatalog>,
        resolver: Arc<SlugResolver>,
        paths: SitePaths,
    ) -> Self {
        Self {
            catalog,
            resolver,
            paths,
        }
    }
}
