// src/application/ports/util.rs

/// Derives the URL slug of a free-text catalog name.
///
/// Implementations must be total (empty in, empty out), case-insensitive and
/// idempotent, and produce only characters that are safe in a path segment.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
