pub mod branches;
pub mod directory;

pub use branches::{BranchDto, BranchSummaryDto};
pub use directory::{BankDirectoryDto, CityDirectoryDto, DirectoryLink, StateDirectoryDto};
