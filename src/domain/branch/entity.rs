use crate::domain::branch::value_objects::IfscCode;

/// A single row of the externally loaded branch catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub ifsc: IfscCode,
    pub bank: Option<String>,
    pub branch: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub centre: Option<String>,
    pub contact: Option<String>,
    pub micr: Option<String>,
    pub swift: Option<String>,
    pub iso3166: Option<String>,
    pub imps: Option<bool>,
    pub neft: Option<bool>,
    pub rtgs: Option<bool>,
    pub upi: Option<bool>,
}

/// Listing projection shown on a city page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSummary {
    pub ifsc: IfscCode,
    pub branch: Option<String>,
    pub address: Option<String>,
}

/// One element of an enumerated catalog projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Bank {
        bank: String,
    },
    State {
        bank: String,
        state: String,
    },
    City {
        bank: String,
        state: String,
        city: String,
    },
    Branch {
        ifsc: IfscCode,
    },
}
