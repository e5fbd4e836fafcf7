//! Mining pipeline
//!
//! Orchestrates the stages, each reading the previous stage's files from
//! the output directory:
//! 1. Acquire and analyze providers (profiles JSON, CSV summary, failure log)
//! 2. Build the global semantic keyword table
//! 3. Build the per-framework keyword table
//! 4. Compile the learned vocabulary and export the regex map

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;
use tracing::info;

use crate::acquire::{self, Cloner};
use crate::classify::{Classifier, Vocabulary};
use crate::config::{OutputPaths, ProjectConfig};
use crate::keywords::{build_framework_keywords, build_global_keywords};
use crate::models::{FrameworkKeywords, ProfileDocument, SemanticKeywords};
use crate::reporters::{read_json, write_json, write_summary_csv};

/// Counts from one mining run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MineStats {
    pub mined: usize,
    pub failed: usize,
}

/// Full mining pipeline over one configuration and output directory.
pub struct Pipeline {
    config: ProjectConfig,
    paths: OutputPaths,
}

impl Pipeline {
    pub fn new(config: ProjectConfig, out_dir: &Path) -> Self {
        let paths = config.output.resolve(out_dir);
        Self { config, paths }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    fn ensure_out_dir(&self) -> Result<()> {
        if let Some(parent) = self.paths.profiles.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        Ok(())
    }

    /// Acquire and analyze every provider, then write the profile document,
    /// the CSV summary and the failure log.
    pub fn mine<F>(&self, cloner: &dyn Cloner, on_done: F) -> Result<MineStats>
    where
        F: Fn(&str, usize) + Sync,
    {
        self.ensure_out_dir()?;
        acquire::reset_failure_log(&self.paths.failure_log)?;

        let outcome = acquire::mine_providers(&self.config, cloner, on_done)?;

        acquire::append_failures(&self.paths.failure_log, &outcome.failures)?;
        write_json(&self.paths.profiles, &outcome.profiles)?;
        write_summary_csv(
            &self.paths.summary_csv,
            &outcome.profiles,
            self.config.mining.top_per_category,
        )?;
        info!(
            "Wrote {} profiles to {}",
            outcome.profiles.len(),
            self.paths.profiles.display()
        );

        Ok(MineStats {
            mined: outcome.profiles.len(),
            failed: outcome.failures.len(),
        })
    }

    /// Load the profile document written by [`Pipeline::mine`].
    pub fn load_profiles(&self) -> Result<ProfileDocument> {
        read_json(&self.paths.profiles).context("Run `agentmine mine` first")
    }

    /// Build and persist the global semantic keyword table.
    pub fn build_keywords(&self) -> Result<SemanticKeywords> {
        let doc = self.load_profiles()?;
        let keywords = build_global_keywords(&doc, &self.config.keywords);
        self.ensure_out_dir()?;
        write_json(&self.paths.semantic_keywords, &keywords)?;
        info!(
            "Wrote {} semantic keywords to {}",
            keywords.semantic_keywords.len(),
            self.paths.semantic_keywords.display()
        );
        Ok(keywords)
    }

    /// Build and persist the per-framework keyword table.
    pub fn build_frameworks(&self) -> Result<FrameworkKeywords> {
        let doc = self.load_profiles()?;
        let frameworks = build_framework_keywords(&doc, &self.config.keywords);
        self.ensure_out_dir()?;
        write_json(&self.paths.framework_keywords, &frameworks)?;
        info!(
            "Wrote keywords for {} frameworks to {}",
            frameworks.len(),
            self.paths.framework_keywords.display()
        );
        Ok(frameworks)
    }

    /// Learned vocabulary from the output directory, with defaults for
    /// whatever is missing.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::load(&self.paths.semantic_keywords, &self.paths.framework_keywords)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(&self.vocabulary())
    }

    /// Compile the current vocabulary and persist the regex map.
    pub fn export_patterns(&self) -> Result<IndexMap<String, String>> {
        let map = self.classifier().regex_map();
        self.ensure_out_dir()?;
        write_json(&self.paths.regex_patterns, &map)?;
        info!(
            "Wrote {} patterns to {}",
            map.len(),
            self.paths.regex_patterns.display()
        );
        Ok(map)
    }
}
