//! Framework scoring and agentic classification

use super::vocabulary::Vocabulary;
use crate::models::ClassificationResult;
use crate::patterns::{
    category_patterns, KeywordPattern, Matcher, INTEGRATION_POINTS, LANGUAGES, SDK_REFS,
};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::warn;

/// A framework counts as detected above this confidence.
pub const FRAMEWORK_THRESHOLD: f64 = 0.2;

/// Key for core keyword hits in `keywords_matched`.
pub const AGENTIC_KEYWORDS: &str = "agentic_keywords";

/// Distinct matched keywords over keyword set size, capped at 1.0 and
/// rounded to three decimals.
pub fn compute_confidence(matches: &[String], keyword_count: usize) -> f64 {
    if keyword_count == 0 {
        return 0.0;
    }
    let distinct = matches.iter().collect::<HashSet<_>>().len();
    let ratio = (distinct as f64 / keyword_count as f64).min(1.0);
    (ratio * 1000.0).round() / 1000.0
}

/// Compiled matchers for one vocabulary. Build once, classify many texts.
#[derive(Debug, Clone)]
pub struct Classifier {
    core: Option<KeywordPattern>,
    frameworks: Vec<KeywordPattern>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

impl Classifier {
    /// Compile the core pattern and one pattern per framework. Frameworks
    /// with empty keyword lists get no pattern and can never match.
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let core = KeywordPattern::compile("core_agentic", &vocabulary.core_keywords);
        let frameworks = vocabulary
            .frameworks
            .iter()
            .filter_map(|(name, keywords)| KeywordPattern::compile(name.as_str(), keywords))
            .collect();
        Self { core, frameworks }
    }

    /// Names of frameworks that have a compiled pattern.
    pub fn framework_names(&self) -> impl Iterator<Item = &str> {
        self.frameworks.iter().map(|p| p.label())
    }

    /// Score a text against every matcher.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text = text.to_lowercase();
        let mut keywords_matched: BTreeMap<String, Vec<String>> = BTreeMap::new();

        let core_hits = self
            .core
            .as_ref()
            .map(|p| p.find_all(&text))
            .unwrap_or_default();
        let core_matched = !core_hits.is_empty();
        keywords_matched.insert(AGENTIC_KEYWORDS.to_string(), core_hits);

        let mut scores: BTreeMap<&str, f64> = BTreeMap::new();
        for pattern in &self.frameworks {
            let hits = pattern.find_all(&text);
            if hits.is_empty() {
                continue;
            }
            scores.insert(pattern.label(), compute_confidence(&hits, pattern.keyword_count()));
            keywords_matched.insert(pattern.label().to_string(), hits);
        }

        for category in category_patterns() {
            let hits = category.find_all(&text);
            if !hits.is_empty() {
                keywords_matched.insert(category.label().to_string(), hits);
            }
        }

        let frameworks: BTreeSet<String> = scores
            .iter()
            .filter(|(_, score)| **score > FRAMEWORK_THRESHOLD)
            .map(|(name, _)| name.to_string())
            .collect();
        let confidence = scores.values().copied().fold(0.0, f64::max);
        let distinct = |label: &str| -> BTreeSet<String> {
            keywords_matched
                .get(label)
                .map(|hits| hits.iter().cloned().collect())
                .unwrap_or_default()
        };

        ClassificationResult {
            is_agentic: !frameworks.is_empty() || core_matched,
            confidence,
            tools: distinct(INTEGRATION_POINTS),
            sdks: distinct(SDK_REFS),
            languages: distinct(LANGUAGES),
            frameworks,
            keywords_matched,
        }
    }

    /// Every pattern as a string, keyed by category label, for external
    /// regex tools. Order: core, frameworks, fixed categories.
    pub fn regex_map(&self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        if let Some(core) = &self.core {
            map.insert("core_agentic".to_string(), core.pattern().to_string());
        }
        for pattern in &self.frameworks {
            let base = format!("framework_{}", pattern.label().to_lowercase());
            let mut key = base.clone();
            let mut n = 2;
            while map.contains_key(&key) {
                key = format!("{}_{}", base, n);
                n += 1;
            }
            if key != base {
                warn!(
                    "Framework '{}' collides with another name under {}; exported as {}",
                    pattern.label(),
                    base,
                    key
                );
            }
            map.insert(key, pattern.pattern().to_string());
        }
        for category in category_patterns() {
            map.insert(category.label().to_string(), category.pattern().to_string());
        }
        map
    }
}
