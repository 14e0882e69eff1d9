use crate::domain::branch::entity::{Branch, BranchSummary, CatalogEntry};
use crate::domain::branch::value_objects::{CatalogKind, IfscCode, PageWindow};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Lazily produced catalog projection. Holding the stream may hold a
/// database connection; dropping it releases the connection.
pub type CatalogStream = BoxStream<'static, DomainResult<CatalogEntry>>;

/// Read-only access to the branch catalog.
///
/// The `distinct_*` methods return names in ascending order; slug resolution
/// relies on that order to pick a winner when names collide.
#[async_trait]
pub trait BranchCatalog: Send + Sync {
    async fn find_by_code(&self, code: &IfscCode) -> DomainResult<Option<Branch>>;

    async fn distinct_banks(&self) -> DomainResult<Vec<String>>;

    async fn distinct_states(&self, bank: &str) -> DomainResult<Vec<String>>;

    async fn distinct_cities(&self, bank: &str, state: &str) -> DomainResult<Vec<String>>;

    async fn branches_in_city(
        &self,
        bank: &str,
        state: &str,
        city: &str,
    ) -> DomainResult<Vec<BranchSummary>>;

    /// Number of entries `stream_entries(kind, None)` would yield.
    async fn count(&self, kind: CatalogKind) -> DomainResult<u64>;

    /// Enumerate `kind` in ascending order, optionally sliced by `window`.
    fn stream_entries(&self, kind: CatalogKind, window: Option<PageWindow>) -> CatalogStream;
}
