//! Append-only failure log

use super::pool::AcquireFailure;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Line written after every failure entry.
pub const FAILURE_SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Truncate the log at the start of a mining run and stamp it.
pub fn reset_failure_log(path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create failure log {}", path.display()))?;
    writeln!(file, "# agentmine run started {}", Utc::now().to_rfc3339())?;
    Ok(())
}

/// Append one entry per failure: `[provider] source`, the error, a separator.
pub fn append_failures(path: &Path, failures: &[AcquireFailure]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open failure log {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for failure in failures {
        writeln!(out, "[{}] {}", failure.provider, failure.source)?;
        writeln!(out, "{}", failure.error)?;
        writeln!(out, "{}", FAILURE_SEPARATOR)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(provider: &str) -> AcquireFailure {
        AcquireFailure {
            provider: provider.to_string(),
            source: format!("https://example.test/{}", provider.to_lowercase()),
            error: "clone timed out after 180s".to_string(),
        }
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(FAILURE_SEPARATOR.len(), 80);
        assert!(FAILURE_SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_reset_then_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clone_failures.log");
        std::fs::write(&path, "stale entry from last run\n").unwrap();

        reset_failure_log(&path).unwrap();
        append_failures(&path, &[failure("AutoGen"), failure("Letta")]).unwrap();

        let log = std::fs::read_to_string(&path).unwrap();
        assert!(!log.contains("stale"));
        let lines: Vec<&str> = log.lines().collect();
        assert!(lines[0].starts_with("# agentmine run started "));
        assert_eq!(lines[1], "[AutoGen] https://example.test/autogen");
        assert_eq!(lines[2], "clone timed out after 180s");
        assert_eq!(lines[3], FAILURE_SEPARATOR);
        assert_eq!(lines[4], "[Letta] https://example.test/letta");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_append_creates_missing_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failures.log");
        append_failures(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
