use super::BranchSummaryDto;
use serde::Serialize;

/// A named catalog value together with the site path that lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryLink {
    pub name: String,
    pub slug: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BankDirectoryDto {
    pub bank: DirectoryLink,
    pub states: Vec<DirectoryLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateDirectoryDto {
    pub bank: DirectoryLink,
    pub state: DirectoryLink,
    pub cities: Vec<DirectoryLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityDirectoryDto {
    pub bank: DirectoryLink,
    pub state: DirectoryLink,
    pub city: DirectoryLink,
    pub branches: Vec<BranchSummaryDto>,
}

impl DirectoryLink {
    /// Whether the name produced a non-empty slug and so has a page.
    pub fn is_routable(&self) -> bool {
        !self.slug.is_empty()
    }
}
