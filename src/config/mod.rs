//! Configuration module for agentmine
//!
//! This module handles:
//! - Mining settings (workers, clone timeout, scanned extensions)
//! - Vocabulary limits and stop-lists
//! - Output file names
//! - The provider registry

mod project_config;

pub use project_config::{
    load_config_file,
    load_project_config,
    KeywordConfig,
    MiningConfig,
    OutputConfig,
    OutputPaths,
    ProjectConfig,
    ProviderSource,
    SourceLocator,
    CONFIG_FILE_NAME,
    EXAMPLE_CONFIG,
};
