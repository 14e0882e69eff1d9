mod directory;
mod lookup;
mod service;

pub use directory::{BankDirectoryQuery, CityDirectoryQuery, StateDirectoryQuery};
pub use lookup::LookupBranchQuery;
pub use service::BranchQueryService;
