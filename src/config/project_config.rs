//! Project-level configuration support
//!
//! Loads configuration from `agentmine.toml` or `.agentminerc.json` in the
//! working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # agentmine.toml
//!
//! [mining]
//! workers = 6
//! clone_timeout_secs = 180
//! source_extensions = ["py", "js", "ts"]
//!
//! [keywords]
//! global_limit = 500
//! framework_limit = 50
//!
//! [output]
//! profiles = "agentic_agent_profiles.json"
//!
//! [providers.LangChain]
//! url = "https://github.com/langchain-ai/langchain"
//! frameworks = ["langchain"]
//!
//! [providers.LocalDemo]
//! path = "../my-agent"
//! ```
//!
//! A relative provider `path` is taken relative to the config file's directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "agentmine.toml";
const JSON_CONFIG_FILE_NAME: &str = ".agentminerc.json";

/// Top-level configuration loaded from agentmine.toml or similar
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub mining: MiningConfig,

    #[serde(default)]
    pub keywords: KeywordConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Repositories to mine, keyed by provider name
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderSource>,
}

/// Acquisition and extraction settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MiningConfig {
    /// Concurrent clone+scan units (default: 6)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-clone timeout in seconds (default: 180)
    #[serde(default = "default_clone_timeout_secs")]
    pub clone_timeout_secs: u64,

    /// Extensions scanned as source code
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Extensions parsed as structured config
    #[serde(default = "default_config_extensions")]
    pub config_extensions: Vec<String>,

    /// Rows per provider and category in the CSV summary
    #[serde(default = "default_top_per_category")]
    pub top_per_category: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            clone_timeout_secs: default_clone_timeout_secs(),
            source_extensions: default_source_extensions(),
            config_extensions: default_config_extensions(),
            top_per_category: default_top_per_category(),
        }
    }
}

fn default_workers() -> usize {
    6
}
fn default_clone_timeout_secs() -> u64 {
    180
}
fn default_source_extensions() -> Vec<String> {
    ["py", "js", "ts"].iter().map(|s| s.to_string()).collect()
}
fn default_config_extensions() -> Vec<String> {
    ["yaml", "yml", "json"].iter().map(|s| s.to_string()).collect()
}
fn default_top_per_category() -> usize {
    50
}

/// Vocabulary building limits and stop-lists
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeywordConfig {
    /// Size of the global semantic keyword table (default: 500)
    #[serde(default = "default_global_limit")]
    pub global_limit: usize,

    /// Tokens considered per framework before filtering (default: 50)
    #[serde(default = "default_framework_limit")]
    pub framework_limit: usize,

    /// Generic tokens removed from framework keyword lists
    #[serde(default = "default_framework_stop_words")]
    pub framework_stop_words: Vec<String>,

    /// Identifier fragments ignored by the global table
    #[serde(default = "default_identifier_stop_words")]
    pub identifier_stop_words: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            global_limit: default_global_limit(),
            framework_limit: default_framework_limit(),
            framework_stop_words: default_framework_stop_words(),
            identifier_stop_words: default_identifier_stop_words(),
        }
    }
}

fn default_global_limit() -> usize {
    500
}
fn default_framework_limit() -> usize {
    50
}
fn default_framework_stop_words() -> Vec<String> {
    ["tool", "step", "task", "context", "schema"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_identifier_stop_words() -> Vec<String> {
    ["self", "init", "main"].iter().map(|s| s.to_string()).collect()
}

/// Output file names, resolved against the output directory
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_profiles")]
    pub profiles: String,
    #[serde(default = "default_summary_csv")]
    pub summary_csv: String,
    #[serde(default = "default_semantic_keywords")]
    pub semantic_keywords: String,
    #[serde(default = "default_framework_keywords")]
    pub framework_keywords: String,
    #[serde(default = "default_regex_patterns")]
    pub regex_patterns: String,
    #[serde(default = "default_failure_log")]
    pub failure_log: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
            summary_csv: default_summary_csv(),
            semantic_keywords: default_semantic_keywords(),
            framework_keywords: default_framework_keywords(),
            regex_patterns: default_regex_patterns(),
            failure_log: default_failure_log(),
        }
    }
}

fn default_profiles() -> String {
    "agentic_agent_profiles.json".to_string()
}
fn default_summary_csv() -> String {
    "agentic_features_summary.csv".to_string()
}
fn default_semantic_keywords() -> String {
    "agentic_semantic_keywords.json".to_string()
}
fn default_framework_keywords() -> String {
    "framework_semantic_keywords.json".to_string()
}
fn default_regex_patterns() -> String {
    "agentic_regex_patterns.json".to_string()
}
fn default_failure_log() -> String {
    "clone_failures.log".to_string()
}

/// Concrete output locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub profiles: PathBuf,
    pub summary_csv: PathBuf,
    pub semantic_keywords: PathBuf,
    pub framework_keywords: PathBuf,
    pub regex_patterns: PathBuf,
    pub failure_log: PathBuf,
}

impl OutputConfig {
    pub fn resolve(&self, out_dir: &Path) -> OutputPaths {
        OutputPaths {
            profiles: out_dir.join(&self.profiles),
            summary_csv: out_dir.join(&self.summary_csv),
            semantic_keywords: out_dir.join(&self.semantic_keywords),
            framework_keywords: out_dir.join(&self.framework_keywords),
            regex_patterns: out_dir.join(&self.regex_patterns),
            failure_log: out_dir.join(&self.failure_log),
        }
    }
}

/// Where a provider's code comes from
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderSource {
    /// Git remote, cloned into a scratch directory
    #[serde(default)]
    pub url: Option<String>,

    /// Existing local checkout, scanned in place
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Raw framework tags for this provider
    #[serde(default)]
    pub frameworks: Vec<String>,
}

/// Resolved source of one unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    Remote(String),
    Local(PathBuf),
}

impl std::fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocator::Remote(url) => write!(f, "{}", url),
            SourceLocator::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ProviderSource {
    /// A local path wins over a URL when both are set.
    pub fn locator(&self) -> Option<SourceLocator> {
        if let Some(path) = &self.path {
            return Some(SourceLocator::Local(path.clone()));
        }
        self.url.clone().map(SourceLocator::Remote)
    }
}

/// Load configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `agentmine.toml`
/// 2. `.agentminerc.json`
///
/// Returns default configuration if no config file is found or parsing fails.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(JSON_CONFIG_FILE_NAME);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    ProjectConfig::default()
}

/// Load an explicitly named config file; the format follows the extension.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json_config(path),
        _ => load_toml_config(path),
    }
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let mut config: ProjectConfig = toml::from_str(&content)?;
    anchor_provider_paths(&mut config, path);
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let mut config: ProjectConfig = serde_json::from_str(&content)?;
    anchor_provider_paths(&mut config, path);
    Ok(config)
}

/// Relative provider paths are relative to the config file that names them.
fn anchor_provider_paths(config: &mut ProjectConfig, config_path: &Path) {
    let Some(base) = config_path.parent() else {
        return;
    };
    for source in config.providers.values_mut() {
        if let Some(path) = source.path.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Example config written by `agentmine init`
pub const EXAMPLE_CONFIG: &str = r#"# agentmine configuration

[mining]
# Concurrent clone+scan workers
workers = 6
# Seconds before a clone is abandoned
clone_timeout_secs = 180
source_extensions = ["py", "js", "ts"]
config_extensions = ["yaml", "yml", "json"]

[keywords]
global_limit = 500
framework_limit = 50
framework_stop_words = ["tool", "step", "task", "context", "schema"]

[providers.LangChain]
url = "https://github.com/langchain-ai/langchain"
frameworks = ["langchain"]

[providers.Microsoft_Autogen]
url = "https://github.com/microsoft/autogen"
frameworks = ["autogen"]

[providers.Semantic_Kernel]
url = "https://github.com/microsoft/semantic-kernel"
frameworks = ["semantic_kernel"]

[providers.LlamaIndex]
url = "https://github.com/run-llama/llama_index"
frameworks = ["llamaindex"]

[providers.CrewAI]
url = "https://github.com/crewAIInc/crewAI"
frameworks = ["crewai"]

[providers.SmolAgents]
url = "https://github.com/huggingface/smolagents"
frameworks = ["smolagents"]

[providers.Haystack]
url = "https://github.com/deepset-ai/haystack"
frameworks = ["haystack"]

[providers.uAgents]
url = "https://github.com/fetchai/uAgents"
frameworks = ["uagents"]

# Local checkouts are scanned in place (relative to this file):
# [providers.MyAgent]
# path = "../my-agent"
# frameworks = ["langchain"]
"#;
