pub mod path;
pub mod resolver;

pub use path::{HierarchyLevel, PathResolution, ResolvedPath, Unresolved};
pub use resolver::SlugResolver;
