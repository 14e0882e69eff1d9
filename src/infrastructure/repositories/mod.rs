// src/infrastructure/repositories/mod.rs
mod cached_branch;
mod error;
mod postgres_branch;

pub use cached_branch::CachedBranchCatalog;
pub use error::map_sqlx;
pub use postgres_branch::PostgresBranchCatalog;
