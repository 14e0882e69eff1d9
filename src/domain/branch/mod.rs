pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Branch, BranchSummary, CatalogEntry};
pub use repository::{BranchCatalog, CatalogStream};
pub use value_objects::{CatalogKind, IfscCode, PageWindow, page_count};
