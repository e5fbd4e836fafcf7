//! Bounded worker pool over configured providers

use super::cloner::{head_revision, Cloner};
use super::AcquireError;
use crate::classify::Classifier;
use crate::config::{MiningConfig, ProjectConfig, ProviderSource, SourceLocator};
use crate::keywords::normalize_frameworks;
use crate::mining::{analyze_local_repo, RepoAnalysis};
use crate::models::{AgentProfile, FrameworkSignals, ProfileDocument, ProfileMetadata, ProviderProfile};
use crate::patterns::{category, Matcher, SDK_REFS};
use anyhow::Result;
use rayon::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// One provider that contributed no profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireFailure {
    pub provider: String,
    /// URL or path, as configured
    pub source: String,
    pub error: String,
}

/// Result of mining every configured provider.
#[derive(Debug, Default)]
pub struct MineOutcome {
    pub profiles: ProfileDocument,
    /// Sorted by provider name
    pub failures: Vec<AcquireFailure>,
}

/// SDK names in one import target. Each dotted segment is tried whole, then
/// by its prefix before the first underscore, so `langchain_core` and
/// `crewai_tools` count for their parent SDK.
fn import_sdks(sdk: &impl Matcher, import: &str) -> Vec<String> {
    import
        .split('.')
        .flat_map(|segment| {
            let hits = sdk.find_all(segment);
            if !hits.is_empty() {
                return hits;
            }
            match segment.split_once('_') {
                Some((prefix, _)) => sdk.find_all(prefix),
                None => Vec::new(),
            }
        })
        .collect()
}

/// Framework display names for a provider: explicit tags plus SDKs named by
/// its import targets.
pub fn framework_signals(explicit: &[String], analysis: &RepoAnalysis) -> FrameworkSignals {
    let mut raw: Vec<String> = explicit.to_vec();
    if let Some(sdk) = category(SDK_REFS) {
        for (import, _) in analysis.code_features.imports.iter() {
            raw.extend(import_sdks(sdk, import));
        }
    }
    FrameworkSignals {
        frameworks: normalize_frameworks(&raw).into_iter().collect(),
    }
}

/// Assemble the persisted profile for one scanned checkout.
pub fn build_profile(
    analysis: RepoAnalysis,
    explicit_frameworks: &[String],
    revision: Option<String>,
    classifier: &Classifier,
) -> ProviderProfile {
    let signals = framework_signals(explicit_frameworks, &analysis);

    let is_agentic = !signals.frameworks.is_empty() || {
        let mut text = String::new();
        for part in [&analysis.readme.name, &analysis.readme.description].into_iter().flatten() {
            text.push_str(part);
            text.push('\n');
        }
        for (import, _) in analysis.code_features.imports.iter() {
            text.push_str(import);
            text.push('\n');
        }
        classifier.classify(&text).is_agentic
    };

    ProviderProfile {
        agent_profile: AgentProfile {
            is_agentic,
            revision,
            code_features: analysis.code_features,
            metadata: ProfileMetadata {
                readme: analysis.readme,
                config: analysis.config,
            },
        },
        framework_signals: signals,
    }
}

fn acquire_one(
    source: &ProviderSource,
    config: &MiningConfig,
    cloner: &dyn Cloner,
    classifier: &Classifier,
) -> Result<ProviderProfile, AcquireError> {
    match source.locator().ok_or(AcquireError::NoSource)? {
        SourceLocator::Local(path) => {
            if !path.is_dir() {
                return Err(AcquireError::MissingPath(path));
            }
            Ok(scan(&path, source, config, classifier))
        }
        SourceLocator::Remote(url) => {
            // Removed on drop, whichever way this arm exits.
            let scratch = tempfile::Builder::new().prefix("agentmine-").tempdir()?;
            let dest = scratch.path().join("repo");
            let timeout = Duration::from_secs(config.clone_timeout_secs);
            cloner.clone_into(&url, &dest, timeout)?;
            Ok(scan(&dest, source, config, classifier))
        }
    }
}

fn scan(
    path: &Path,
    source: &ProviderSource,
    config: &MiningConfig,
    classifier: &Classifier,
) -> ProviderProfile {
    let analysis = analyze_local_repo(path, config);
    let revision = head_revision(path);
    build_profile(analysis, &source.frameworks, revision, classifier)
}

/// Acquire and analyze every provider in `config` on a pool of
/// `mining.workers` threads. `on_done` runs once per provider as it
/// finishes, with the number finished so far.
pub fn mine_providers<F>(config: &ProjectConfig, cloner: &dyn Cloner, on_done: F) -> Result<MineOutcome>
where
    F: Fn(&str, usize) + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.mining.workers.max(1))
        .build()?;
    let classifier = Classifier::default();
    let completed = AtomicUsize::new(0);

    let units: Vec<(&String, &ProviderSource)> = config.providers.iter().collect();
    info!(
        "Mining {} providers with {} workers",
        units.len(),
        config.mining.workers.max(1)
    );

    let results: Vec<(String, String, Result<ProviderProfile, AcquireError>)> = pool.install(|| {
        units
            .par_iter()
            .map(|(name, source)| {
                let result = acquire_one(source, &config.mining, cloner, &classifier);
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                on_done(name, done);
                let source_label = source
                    .locator()
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "<none>".to_string());
                (name.to_string(), source_label, result)
            })
            .collect()
    });

    let mut outcome = MineOutcome::default();
    for (provider, source, result) in results {
        match result {
            Ok(profile) => {
                debug!("Mined {} from {}", provider, source);
                outcome.profiles.insert(provider, profile);
            }
            Err(e) => {
                warn!("Failed to mine {} from {}: {}", provider, source, e);
                outcome.failures.push(AcquireFailure {
                    provider,
                    source,
                    error: e.to_string(),
                });
            }
        }
    }
    outcome.failures.sort_by(|a, b| a.provider.cmp(&b.provider));

    info!(
        "Mined {} providers, {} failed",
        outcome.profiles.len(),
        outcome.failures.len()
    );
    Ok(outcome)
}
