//! Learned keyword sets compiled into whole-word alternations

use super::Matcher;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use tracing::warn;

/// Build `\b(k1|k2|...)\b` with every keyword escaped. Empty keywords are
/// dropped and an empty set yields `None`.
pub fn keyword_alternation<S: AsRef<str>>(keywords: &[S]) -> Option<String> {
    let escaped: Vec<String> = keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|k| !k.is_empty())
        .map(regex::escape)
        .collect();
    if escaped.is_empty() {
        return None;
    }
    Some(format!(r"\b({})\b", escaped.join("|")))
}

/// A compiled, case-insensitive matcher for one keyword set.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    label: String,
    source: String,
    regex: Regex,
    keyword_count: usize,
}

impl KeywordPattern {
    /// Compile a keyword set. Returns `None` for an empty set, and logs and
    /// returns `None` if the alternation exceeds the regex size limits.
    pub fn compile<S: AsRef<str>>(label: impl Into<String>, keywords: &[S]) -> Option<Self> {
        let label = label.into();
        let source = keyword_alternation(keywords)?;
        let regex = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(e) => {
                warn!("Skipping pattern for {}: {}", label, e);
                return None;
            }
        };
        // Matching ignores case, so spellings differing only by case count once.
        let keyword_count = keywords
            .iter()
            .map(AsRef::as_ref)
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
            .collect::<HashSet<_>>()
            .len();
        Some(Self {
            label,
            source,
            regex,
            keyword_count,
        })
    }

    /// Distinct keywords in the set this pattern was built from.
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }
}

impl Matcher for KeywordPattern {
    fn label(&self) -> &str {
        &self.label
    }

    fn pattern(&self) -> &str {
        &self.source
    }

    fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
