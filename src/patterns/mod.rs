//! Dynamic pattern compilation
//!
//! Learned keyword sets and fixed categories are both exposed through the
//! [`Matcher`] trait so the scorer can treat them uniformly.

mod category;
mod keyword;

pub use category::{
    category, category_patterns, CategoryPattern, CONFIG_METADATA, INTEGRATION_POINTS, LANGUAGES,
    SDK_REFS,
};
pub use keyword::{keyword_alternation, KeywordPattern};

/// Something that can be run over text to produce a list of hits.
pub trait Matcher: Send + Sync {
    /// Category label, used as the key in match maps and regex exports
    fn label(&self) -> &str;

    /// Pattern source in a form external regex tools accept
    fn pattern(&self) -> &str;

    /// Every hit in order of appearance
    fn find_all(&self, text: &str) -> Vec<String>;

    fn is_match(&self, text: &str) -> bool {
        !self.find_all(text).is_empty()
    }
}
