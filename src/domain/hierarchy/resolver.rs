// src/domain/hierarchy/resolver.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::branch::BranchCatalog;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::hierarchy::path::{HierarchyLevel, PathResolution, ResolvedPath, Unresolved};

/// Domain service mapping URL slugs back to canonical bank, state and city
/// names by scanning the distinct values at each level.
///
/// There is no stored slug column: every candidate is slugified on the fly
/// and the first equal one wins. Candidate lists come from the injected
/// catalog, so a caching catalog can be swapped in without touching callers.
pub struct SlugResolver {
    catalog: Arc<dyn BranchCatalog>,
    slugger: Arc<dyn SlugGenerator>,
}

impl SlugResolver {
    pub fn new(catalog: Arc<dyn BranchCatalog>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { catalog, slugger }
    }

    pub async fn resolve_bank(&self, slug: &str) -> DomainResult<Option<String>> {
        let banks = self.catalog.distinct_banks().await?;
        Ok(self.first_match(banks, slug))
    }

    pub async fn resolve_state(&self, bank: &str, slug: &str) -> DomainResult<Option<String>> {
        let states = self.catalog.distinct_states(bank).await?;
        Ok(self.first_match(states, slug))
    }

    pub async fn resolve_city(
        &self,
        bank: &str,
        state: &str,
        slug: &str,
    ) -> DomainResult<Option<String>> {
        let cities = self.catalog.distinct_cities(bank, state).await?;
        Ok(self.first_match(cities, slug))
    }

    /// Resolve up to three segments (bank, state, city), stopping at the
    /// first level that does not match.
    pub async fn resolve(&self, segments: &[&str]) -> DomainResult<PathResolution> {
        let (bank_slug, rest) = match segments {
            [] => return Err(DomainError::Validation("empty slug path".into())),
            [first, rest @ ..] if rest.len() <= 2 => (*first, rest),
            _ => {
                return Err(DomainError::Validation(
                    "slug path has more than three segments".into(),
                ));
            }
        };

        let Some(bank) = self.resolve_bank(bank_slug).await? else {
            return Ok(unresolved(HierarchyLevel::Bank, bank_slug));
        };

        let mut path = ResolvedPath {
            bank,
            state: None,
            city: None,
        };

        let Some(state_slug) = rest.first() else {
            return Ok(PathResolution::Resolved(path));
        };
        let Some(state) = self.resolve_state(&path.bank, state_slug).await? else {
            return Ok(unresolved(HierarchyLevel::State, state_slug));
        };

        if let Some(city_slug) = rest.get(1) {
            let Some(city) = self.resolve_city(&path.bank, &state, city_slug).await? else {
                return Ok(unresolved(HierarchyLevel::City, city_slug));
            };
            path.city = Some(city);
        }
        path.state = Some(state);

        Ok(PathResolution::Resolved(path))
    }

    fn first_match(&self, candidates: Vec<String>, slug: &str) -> Option<String> {
        let wanted = self.slugger.slugify(slug);
        if wanted.is_empty() {
            return None;
        }
        candidates
            .into_iter()
            .find(|candidate| self.slugger.slugify(candidate) == wanted)
    }
}

fn unresolved(level: HierarchyLevel, slug: &str) -> PathResolution {
    tracing::debug!(level = %level, slug, "slug did not resolve");
    PathResolution::Unresolved(Unresolved {
        level,
        slug: slug.to_string(),
    })
}
