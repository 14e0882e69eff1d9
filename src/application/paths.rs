// src/application/paths.rs
use std::sync::Arc;

use crate::application::dto::DirectoryLink;
use crate::application::ports::util::SlugGenerator;
use crate::domain::branch::{CatalogEntry, IfscCode};

/// Builds the site-relative paths of the bank → state → city → branch pages.
#[derive(Clone)]
pub struct SitePaths {
    slugger: Arc<dyn SlugGenerator>,
}

impl SitePaths {
    pub fn new(slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { slugger }
    }

    pub fn slugify(&self, name: &str) -> String {
        self.slugger.slugify(name)
    }

    pub fn bank(&self, bank: &str) -> DirectoryLink {
        let slug = self.slugify(bank);
        DirectoryLink {
            name: bank.to_string(),
            path: format!("/bank/{slug}"),
            slug,
        }
    }

    pub fn state(&self, bank: &str, state: &str) -> DirectoryLink {
        let slug = self.slugify(state);
        DirectoryLink {
            name: state.to_string(),
            path: format!("/bank/{}/{slug}", self.slugify(bank)),
            slug,
        }
    }

    pub fn city(&self, bank: &str, state: &str, city: &str) -> DirectoryLink {
        let slug = self.slugify(city);
        DirectoryLink {
            name: city.to_string(),
            path: format!(
                "/bank/{}/{}/{slug}",
                self.slugify(bank),
                self.slugify(state)
            ),
            slug,
        }
    }

    pub fn branch(code: &IfscCode) -> String {
        format!("/ifsc/{code}")
    }

    /// Path of the page an enumerated entry points at, or `None` when one of
    /// its names slugifies to nothing and the page cannot be addressed.
    pub fn entry_path(&self, entry: &CatalogEntry) -> Option<String> {
        let segments = match entry {
            CatalogEntry::Branch { ifsc } => return Some(Self::branch(ifsc)),
            CatalogEntry::Bank { bank } => vec![self.slugify(bank)],
            CatalogEntry::State { bank, state } => {
                vec![self.slugify(bank), self.slugify(state)]
            }
            CatalogEntry::City { bank, state, city } => vec![
                self.slugify(bank),
                self.slugify(state),
                self.slugify(city),
            ],
        };
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(format!("/bank/{}", segments.join("/")))
    }
}

