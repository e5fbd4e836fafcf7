//! Global semantic keyword table
//!
//! Every distinct identifier in a provider's code features is split into
//! word fragments; each fragment counts once per identifier it appears in.

use crate::config::KeywordConfig;
use crate::mining::{tokenize_identifier, FrequencyTable};
use crate::models::{ProfileDocument, SemanticKeywords};
use std::collections::HashSet;

/// Build the ranked framework-agnostic vocabulary.
pub fn build_global_keywords(doc: &ProfileDocument, config: &KeywordConfig) -> SemanticKeywords {
    let stop: HashSet<&str> = config
        .identifier_stop_words
        .iter()
        .map(String::as_str)
        .collect();
    let mut counter = FrequencyTable::new();

    for profile in doc.values() {
        for (_, table) in profile.agent_profile.code_features.categories() {
            for (name, _) in table.iter() {
                for token in tokenize_identifier(name) {
                    if token.len() > 2 && !stop.contains(token.as_str()) {
                        counter.add(token);
                    }
                }
            }
        }
    }

    SemanticKeywords {
        semantic_keywords: counter.most_common(config.global_limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProviderProfile;

    fn profile_with(classes: &[&str]) -> ProviderProfile {
        let mut profile = ProviderProfile::default();
        for class in classes {
            profile.agent_profile.code_features.classes.add_n(*class, 7);
        }
        profile
    }

    #[test]
    fn test_counts_identifiers_not_occurrences() {
        let mut doc = ProfileDocument::new();
        doc.insert("A".to_string(), profile_with(&["AgentExecutor", "PlannerAgent"]));
        doc.insert("B".to_string(), profile_with(&["ToolAgent", "self_main"]));
        let kw = build_global_keywords(&doc, &KeywordConfig::default());
        assert_eq!(kw.semantic_keywords[0], ("agent".to_string(), 3));
        assert!(kw.tokens().all(|t| t != "self" && t != "main"));
        assert!(kw.tokens().any(|t| t == "executor"));
    }

    #[test]
    fn test_sorted_descending_and_limited() {
        let mut doc = ProfileDocument::new();
        doc.insert("A".to_string(), profile_with(&["AlphaBeta", "BetaGamma", "GammaBeta"]));
        let config = KeywordConfig {
            global_limit: 2,
            ..KeywordConfig::default()
        };
        let kw = build_global_keywords(&doc, &config);
        assert_eq!(
            kw.semantic_keywords,
            vec![("beta".to_string(), 3), ("gamma".to_string(), 2)]
        );
    }

    #[test]
    fn test_short_fragments_dropped() {
        let mut doc = ProfileDocument::new();
        doc.insert("A".to_string(), profile_with(&["IOError", "my_db"]));
        let kw = build_global_keywords(&doc, &KeywordConfig::default());
        assert_eq!(kw.tokens().collect::<Vec<_>>(), vec!["error"]);
    }
}
