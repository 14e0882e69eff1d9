use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyLevel {
    Bank,
    State,
    City,
}

impl HierarchyLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::State => "state",
            Self::City => "city",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical names recovered from a bank/state/city slug path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub bank: String,
    pub state: Option<String>,
    pub city: Option<String>,
}

/// The first level of a slug path that matched no catalog value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub level: HierarchyLevel,
    pub slug: String,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found: {}", self.level, self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    Resolved(ResolvedPath),
    Unresolved(Unresolved),
}

impl PathResolution {
    pub fn into_result(self) -> Result<ResolvedPath, Unresolved> {
        match self {
            Self::Resolved(path) => Ok(path),
            Self::Unresolved(missing) => Err(missing),
        }
    }
}
