use super::BranchQueryService;
use crate::{
    application::{
        dto::BranchDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::branch::IfscCode,
};

pub struct LookupBranchQuery {
    pub code: String,
}

impl BranchQueryService {
    /// Exact, normalized match of an IFSC code against the catalog.
    pub async fn lookup_branch(&self, query: LookupBranchQuery) -> ApplicationResult<BranchDto> {
        let Ok(code) = IfscCode::parse(&query.code) else {
            return Err(ApplicationError::not_found("IFSC code not found"));
        };

        self.catalog
            .find_by_code(&code)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("IFSC code not found"))
    }
}
