use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Canonical IFSC code: uppercase ASCII letters and digits only.
///
/// Catalog rows may carry stray whitespace or punctuation in their `ifsc`
/// column, so every comparison goes through [`IfscCode::normalize`] on both
/// sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfscCode(String);

impl IfscCode {
    /// Uppercase `raw` and drop every character that is not alphanumeric.
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_uppercase())
            .collect()
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err(DomainError::Validation(
                "ifsc code must contain at least one letter or digit".into(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IfscCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IfscCode> for String {
    fn from(value: IfscCode) -> Self {
        value.0
    }
}

/// Which projection of the catalog a listing or sitemap walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Banks,
    States,
    Cities,
    Branches,
}

impl CatalogKind {
    pub const PAGINATED: [Self; 2] = [Self::Branches, Self::Cities];

    pub const fn is_paginated(self) -> bool {
        matches!(self, Self::Branches | Self::Cities)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Banks => "banks",
            Self::States => "states",
            Self::Cities => "cities",
            Self::Branches => "branches",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset/limit slice of an ordered catalog projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Window for the 1-based `page` of `page_size` entries.
    pub fn for_page(page: u32, page_size: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page numbers start at 1".into()));
        }
        if page_size == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self {
            offset: u64::from(page - 1) * u64::from(page_size),
            limit: u64::from(page_size),
        })
    }
}

/// Number of pages needed to cover `total` entries.
pub fn page_count(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}
