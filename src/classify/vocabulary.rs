//! Learned vocabularies with fixed fallbacks
//!
//! The scorer is built from a [`Vocabulary`] value rather than global state,
//! so callers (and tests) decide exactly which keywords are in play.

use crate::models::{FrameworkKeywords, SemanticKeywords};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Core keywords used when no learned table is available.
pub const DEFAULT_AGENTIC_KEYWORDS: [&str; 10] = [
    "agent",
    "planner",
    "executor",
    "memory",
    "workflow",
    "tool",
    "reasoning",
    "context",
    "environment",
    "coordinator",
];

const DEFAULT_FRAMEWORKS: [(&str, &[&str]); 5] = [
    ("LangChain", &["llm", "chain", "prompt", "memory", "tool", "workflow"]),
    ("AutoGen", &["assistant", "groupchat", "planner", "userproxy"]),
    ("CrewAI", &["crew", "role", "task", "planner", "executor"]),
    ("SmolAgents", &["codeagent", "multistep", "toolcalling", "reason"]),
    ("SemanticKernel", &["planner", "skill", "function", "semanticfunction"]),
];

/// Framework map used when no learned table is available.
pub fn default_frameworks() -> FrameworkKeywords {
    DEFAULT_FRAMEWORKS
        .iter()
        .map(|(name, keywords)| {
            (
                name.to_string(),
                keywords.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect()
}

fn default_core_keywords() -> Vec<String> {
    DEFAULT_AGENTIC_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Keyword sets the classifier is compiled from.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    /// Framework-agnostic keywords, ranked
    pub core_keywords: Vec<String>,
    /// Framework display name to keyword list
    pub frameworks: FrameworkKeywords,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            core_keywords: default_core_keywords(),
            frameworks: default_frameworks(),
        }
    }
}

impl Vocabulary {
    pub fn new(core_keywords: Vec<String>, frameworks: FrameworkKeywords) -> Self {
        Self {
            core_keywords,
            frameworks,
        }
    }

    /// Load both learned tables. Each one independently falls back to its
    /// default when the file is missing, malformed or empty.
    pub fn load(semantic_path: &Path, framework_path: &Path) -> Self {
        let core_keywords = match load_core_keywords(semantic_path) {
            Ok(keywords) if !keywords.is_empty() => {
                debug!(
                    "Loaded {} core keywords from {}",
                    keywords.len(),
                    semantic_path.display()
                );
                keywords
            }
            Ok(_) => {
                warn!(
                    "{} has no keywords, using defaults",
                    semantic_path.display()
                );
                default_core_keywords()
            }
            Err(e) => {
                warn!("Using default core keywords: {:#}", e);
                default_core_keywords()
            }
        };

        let frameworks = match load_framework_keywords(framework_path) {
            Ok(map) if !map.is_empty() => {
                debug!(
                    "Loaded {} framework keyword sets from {}",
                    map.len(),
                    framework_path.display()
                );
                map
            }
            Ok(_) => {
                warn!(
                    "{} has no frameworks, using defaults",
                    framework_path.display()
                );
                default_frameworks()
            }
            Err(e) => {
                warn!("Using default framework keywords: {:#}", e);
                default_frameworks()
            }
        };

        Self::new(core_keywords, frameworks)
    }
}

fn load_core_keywords(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let table: SemanticKeywords = serde_json::from_str(&content)
        .with_context(|| format!("Malformed keyword table {}", path.display()))?;
    Ok(table.tokens().map(str::to_string).collect())
}

fn load_framework_keywords(path: &Path) -> Result<FrameworkKeywords> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let map: FrameworkKeywords = serde_json::from_str(&content)
        .with_context(|| format!("Malformed framework table {}", path.display()))?;
    Ok(map)
}
