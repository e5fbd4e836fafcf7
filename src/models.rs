//! Core data models for agentmine
//!
//! These are the persisted shapes: one [`ProviderProfile`] per analyzed
//! repository, the global [`SemanticKeywords`] table and the per-framework
//! keyword table. Everything derived from them (compiled patterns,
//! classification results) is rebuilt on demand.

use crate::mining::FrequencyTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Code feature categories, in the order they are aggregated and reported.
pub const CODE_CATEGORIES: [&str; 4] = ["imports", "classes", "functions", "apis"];

/// Per-category frequency tables extracted from source files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeFeatures {
    #[serde(default)]
    pub imports: FrequencyTable,
    #[serde(default)]
    pub classes: FrequencyTable,
    #[serde(default)]
    pub functions: FrequencyTable,
    #[serde(default)]
    pub apis: FrequencyTable,
}

impl CodeFeatures {
    /// Category name paired with its table, in [`CODE_CATEGORIES`] order.
    pub fn categories(&self) -> [(&'static str, &FrequencyTable); 4] {
        [
            ("imports", &self.imports),
            ("classes", &self.classes),
            ("functions", &self.functions),
            ("apis", &self.apis),
        ]
    }

    /// Accumulate another set of tables into this one.
    pub fn merge(&mut self, other: &CodeFeatures) {
        self.imports.merge(&other.imports);
        self.classes.merge(&other.classes);
        self.functions.merge(&other.functions);
        self.apis.merge(&other.apis);
    }

    pub fn is_empty(&self) -> bool {
        self.categories().iter().all(|(_, table)| table.is_empty())
    }
}

/// What the README of a repository says about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub models: Vec<String>,
}

/// Keys and values pulled out of structured config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    #[serde(default)]
    pub env_vars: Vec<String>,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(default)]
    pub readme: ReadmeMetadata,
    #[serde(default)]
    pub config: ConfigMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    #[serde(default)]
    pub is_agentic: bool,
    /// HEAD commit of the analyzed checkout, when it could be read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default)]
    pub code_features: CodeFeatures,
    #[serde(default)]
    pub metadata: ProfileMetadata,
}

/// Framework names associated with a provider (display names, sorted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkSignals {
    #[serde(default)]
    pub frameworks: Vec<String>,
}

/// One analyzed repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub agent_profile: AgentProfile,
    #[serde(default)]
    pub framework_signals: FrameworkSignals,
}

impl ProviderProfile {
    /// Semantic tokens for framework aggregation: every code feature with
    /// its count, then README and config tool/model mentions once each.
    pub fn semantic_tokens(&self) -> Vec<(&str, usize)> {
        let profile = &self.agent_profile;
        let mut tokens: Vec<(&str, usize)> = Vec::new();
        for (_, table) in profile.code_features.categories() {
            tokens.extend(table.iter().map(|(token, count)| (token.as_str(), count)));
        }
        let readme = &profile.metadata.readme;
        let config = &profile.metadata.config;
        for list in [&readme.tools, &readme.models, &config.tools, &config.models] {
            tokens.extend(list.iter().map(|t| (t.as_str(), 1)));
        }
        tokens
    }
}

/// Provider name to profile. Sorted so reruns serialize identically.
pub type ProfileDocument = BTreeMap<String, ProviderProfile>;

/// Global ranked vocabulary, serialized as `{"semantic_keywords": [[token, count], ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticKeywords {
    #[serde(default)]
    pub semantic_keywords: Vec<(String, usize)>,
}

impl SemanticKeywords {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.semantic_keywords.iter().map(|(t, _)| t.as_str())
    }
}

/// Framework display name to its filtered, ranked keyword list.
pub type FrameworkKeywords = BTreeMap<String, Vec<String>>;

/// Outcome of scoring one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub is_agentic: bool,
    /// Highest framework confidence, in [0, 1]
    pub confidence: f64,
    pub frameworks: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub sdks: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub keywords_matched: BTreeMap<String, Vec<String>>,
}
