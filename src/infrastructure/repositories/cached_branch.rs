// src/infrastructure/repositories/cached_branch.rs
use crate::domain::branch::{
    Branch, BranchCatalog, BranchSummary, CatalogKind, CatalogStream, IfscCode, PageWindow,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum NameScope {
    Banks,
    States { bank: String },
    Cities { bank: String, state: String },
}

struct CachedNames {
    names: Arc<Vec<String>>,
    loaded_at: Instant,
}

/// Catalog decorator memoising the distinct bank/state/city name lists used
/// by slug resolution. Everything else is delegated untouched.
pub struct CachedBranchCatalog {
    inner: Arc<dyn BranchCatalog>,
    ttl: Duration,
    names: RwLock<HashMap<NameScope, CachedNames>>,
}

impl CachedBranchCatalog {
    pub fn new(inner: Arc<dyn BranchCatalog>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            names: RwLock::new(HashMap::new()),
        }
    }

    /// Drop every memoised list.
    pub async fn invalidate(&self) {
        self.names.write().await.clear();
    }

    async fn cached(&self, scope: &NameScope) -> Option<Arc<Vec<String>>> {
        let guard = self.names.read().await;
        guard
            .get(scope)
            .filter(|entry| entry.loaded_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.names))
    }

    async fn names_for(&self, scope: NameScope) -> DomainResult<Vec<String>> {
        if let Some(names) = self.cached(&scope).await {
            return Ok(names.as_ref().clone());
        }

        let names = match &scope {
            NameScope::Banks => self.inner.distinct_banks().await?,
            NameScope::States { bank } => self.inner.distinct_states(bank).await?,
            NameScope::Cities { bank, state } => self.inner.distinct_cities(bank, state).await?,
        };

        tracing::debug!(scope = ?scope, count = names.len(), "refreshed catalog name cache");
        self.names.write().await.insert(
            scope,
            CachedNames {
                names: Arc::new(names.clone()),
                loaded_at: Instant::now(),
            },
        );
        Ok(names)
    }
}

#[async_trait]
impl BranchCatalog for CachedBranchCatalog {
    async fn find_by_code(&self, code: &IfscCode) -> DomainResult<Option<Branch>> {
        self.inner.find_by_code(code).await
    }

    async fn distinct_banks(&self) -> DomainResult<Vec<String>> {
        self.names_for(NameScope::Banks).await
    }

    async fn distinct_states(&self, bank: &str) -> DomainResult<Vec<String>> {
        self.names_for(NameScope::States {
            bank: bank.to_string(),
        })
        .await
    }

    async fn distinct_cities(&self, bank: &str, state: &str) -> DomainResult<Vec<String>> {
        self.names_for(NameScope::Cities {
            bank: bank.to_string(),
            state: state.to_string(),
        })
        .await
    }

    async fn branches_in_city(
        &self,
        bank: &str,
        state: &str,
        city: &str,
    ) -> DomainResult<Vec<BranchSummary>> {
        self.inner.branches_in_city(bank, state, city).await
    }

    async fn count(&self, kind: CatalogKind) -> DomainResult<u64> {
        self.inner.count(kind).await
    }

    fn stream_entries(&self, kind: CatalogKind, window: Option<PageWindow>) -> CatalogStream {
        self.inner.stream_entries(kind, window)
    }
}
