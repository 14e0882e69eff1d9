use crate::domain::branch::{Branch, BranchSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BranchDto {
    /// Normalized IFSC code.
    pub ifsc: String,
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

impl From<Branch> for BranchDto {
    fn from(branch: Branch) -> Self {
        Self {
            ifsc: branch.ifsc.into(),
            bank: branch.bank,
            branch: branch.branch,
            address: branch.address,
            city: branch.city,
            district: branch.district,
            state: branch.state,
            centre: branch.centre,
            contact: branch.contact,
            micr: branch.micr,
            swift: branch.swift,
            iso3166: branch.iso3166,
            imps: branch.imps,
            neft: branch.neft,
            rtgs: branch.rtgs,
            upi: branch.upi,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BranchSummaryDto {
    pub ifsc: String,
    pub branch: Option<String>,
    pub address: Option<String>,
}

impl From<BranchSummary> for BranchSummaryDto {
    fn from(summary: BranchSummary) -> Self {
        Self {
            ifsc: summary.ifsc.into(),
            branch: summary.branch,
            address: summary.address,
        }
    }
}
