//! Per-framework keyword vocabularies
//!
//! Providers tagged with the same framework pool their semantic tokens into
//! one frequency table; the top tokens, minus short and generic ones, become
//! that framework's keyword set.

use super::aliases::normalize_frameworks;
use crate::config::KeywordConfig;
use crate::mining::{normalize_token, FrequencyTable};
use crate::models::{FrameworkKeywords, ProfileDocument, ProviderProfile};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Accumulates token counts per framework display name.
#[derive(Debug, Default)]
pub struct FrameworkAggregator {
    tables: BTreeMap<String, FrequencyTable>,
}

impl FrameworkAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one provider's tokens to every framework it is tagged with.
    /// Untagged providers contribute nothing.
    pub fn add_provider(&mut self, profile: &ProviderProfile) {
        let frameworks = normalize_frameworks(&profile.framework_signals.frameworks);
        if frameworks.is_empty() {
            return;
        }

        let mut tokens = FrequencyTable::new();
        for (raw, count) in profile.semantic_tokens() {
            let token = normalize_token(raw);
            if !token.is_empty() {
                tokens.add_n(token, count);
            }
        }
        if tokens.is_empty() {
            return;
        }

        for framework in frameworks {
            self.tables.entry(framework).or_default().merge(&tokens);
        }
    }

    /// Raw merged table for one framework.
    pub fn table(&self, framework: &str) -> Option<&FrequencyTable> {
        self.tables.get(framework)
    }

    /// Rank, truncate and filter every framework's table. Frameworks whose
    /// list ends up empty are left out.
    pub fn finish(&self, config: &KeywordConfig) -> FrameworkKeywords {
        let stop: HashSet<&str> = config
            .framework_stop_words
            .iter()
            .map(String::as_str)
            .collect();

        let mut out = FrameworkKeywords::new();
        for (framework, table) in &self.tables {
            let keywords: Vec<String> = table
                .most_common(config.framework_limit)
                .into_iter()
                .map(|(token, _)| token)
                .filter(|t| t.len() > 2 && !stop.contains(t.as_str()))
                .collect();
            if keywords.is_empty() {
                debug!("No keywords left for {} after filtering", framework);
                continue;
            }
            out.insert(framework.clone(), keywords);
        }
        out
    }
}

/// Build the framework keyword table for a whole profile document.
pub fn build_framework_keywords(doc: &ProfileDocument, config: &KeywordConfig) -> FrameworkKeywords {
    let mut aggregator = FrameworkAggregator::new();
    for profile in doc.values() {
        aggregator.add_provider(profile);
    }
    aggregator.finish(config)
}
