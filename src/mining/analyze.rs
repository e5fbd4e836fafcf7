//! Local checkout scan: walk a tree and run every extraction surface over it
//!
//! Unreadable files and malformed documents are logged and skipped; a scan
//! never fails because of one bad source.

use super::code::accumulate_code;
use super::config_keys::{ConfigCollector, ConfigFormat};
use super::readme::extract_readme_info;
use crate::config::MiningConfig;
use crate::models::{CodeFeatures, ConfigMetadata, ReadmeMetadata};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const README_FILE_NAME: &str = "README.md";

/// Everything extracted from one checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoAnalysis {
    pub code_features: CodeFeatures,
    pub readme: ReadmeMetadata,
    pub config: ConfigMetadata,
    /// Source files that contributed to `code_features`
    pub files_scanned: usize,
}

/// Files of interest found in one walk.
#[derive(Debug, Default)]
struct RepoFiles {
    sources: Vec<PathBuf>,
    configs: Vec<PathBuf>,
    readmes: Vec<PathBuf>,
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want == ext))
}

fn collect_repo_files(repo_path: &Path, config: &MiningConfig) -> RepoFiles {
    let mut files = RepoFiles::default();

    let mut builder = WalkBuilder::new(repo_path);
    builder
        .hidden(true)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false);

    for entry in builder.build().flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(README_FILE_NAME) {
            files.readmes.push(path.to_path_buf());
        }
        if has_extension(path, &config.source_extensions) {
            files.sources.push(path.to_path_buf());
        }
        if has_extension(path, &config.config_extensions) {
            files.configs.push(path.to_path_buf());
        }
    }

    files.sources.sort();
    files.configs.sort();
    files
}

/// Shallowest README wins; equal depth falls back to path order.
fn pick_readme(mut readmes: Vec<PathBuf>) -> Option<PathBuf> {
    readmes.sort_by(|a, b| {
        a.components()
            .count()
            .cmp(&b.components().count())
            .then_with(|| a.cmp(b))
    });
    readmes.into_iter().next()
}

fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scan a local checkout.
pub fn analyze_local_repo(repo_path: &Path, config: &MiningConfig) -> RepoAnalysis {
    let files = collect_repo_files(repo_path, config);
    let mut analysis = RepoAnalysis::default();

    for path in &files.sources {
        match read_lossy(path) {
            Ok(code) => {
                accumulate_code(&mut analysis.code_features, &code);
                analysis.files_scanned += 1;
            }
            Err(e) => warn!("Error reading {}: {}", path.display(), e),
        }
    }

    if let Some(readme_path) = pick_readme(files.readmes) {
        match read_lossy(&readme_path) {
            Ok(content) => analysis.readme = extract_readme_info(&content),
            Err(e) => warn!("Error parsing README {}: {}", readme_path.display(), e),
        }
    }

    let mut collector = ConfigCollector::new();
    for path in &files.configs {
        let Some(format) = ConfigFormat::from_path(path) else {
            continue;
        };
        let result = read_lossy(path)
            .map_err(anyhow::Error::from)
            .and_then(|text| collector.add_document(&text, format));
        if let Err(e) = result {
            debug!("Skipping config {}: {}", path.display(), e);
        }
    }
    analysis.config = collector.finish();

    debug!(
        "Scanned {} source files, {} config files in {}",
        analysis.files_scanned,
        files.configs.len(),
        repo_path.display()
    );
    analysis
}
