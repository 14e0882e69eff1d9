use crate::application::ports::util::SlugGenerator;

/// Slugifier backed by the `slug` crate.
///
/// Punctuation is dropped before transliteration so that "O'Brien & Sons"
/// reads `obrien-sons` rather than splitting on every symbol.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

pub fn slugify(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace() || *ch == '-')
        .collect();
    slug::slugify(kept)
}
