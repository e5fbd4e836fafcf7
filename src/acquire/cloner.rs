//! Version-control checkout of remote providers

use super::{AcquireError, AcquireResult};
use git2::Repository;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Produces a local file tree for a remote URL.
pub trait Cloner: Send + Sync {
    /// Clone `url` into `dest`, which must not exist yet. Exceeding
    /// `timeout` is an error and leaves no running process behind.
    fn clone_into(&self, url: &str, dest: &Path, timeout: Duration) -> AcquireResult<()>;
}

/// Shallow clones through the `git` binary.
#[derive(Debug, Clone, Default)]
pub struct GitCliCloner;

impl Cloner for GitCliCloner {
    fn clone_into(&self, url: &str, dest: &Path, timeout: Duration) -> AcquireResult<()> {
        debug!("Cloning {} into {}", url, dest.display());
        let mut child = Command::new("git")
            .args(["clone", "--depth", "1", "--quiet", "--", url])
            .arg(dest)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        // Drained concurrently so a noisy git never blocks on a full pipe.
        let stderr_reader = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut buf = String::new();
                let _ = pipe.read_to_string(&mut buf);
                buf
            })
        });
        let collect_stderr = |reader: Option<thread::JoinHandle<String>>| {
            reader
                .and_then(|handle| handle.join().ok())
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                let stderr = collect_stderr(stderr_reader);
                if !stderr.is_empty() {
                    debug!("git stderr before timeout: {}", stderr);
                }
                return Err(AcquireError::Timeout {
                    secs: timeout.as_secs(),
                });
            }
            if let Some(status) = child.try_wait()? {
                let stderr = collect_stderr(stderr_reader);
                if status.success() {
                    return Ok(());
                }
                return Err(AcquireError::CloneFailed {
                    status: status.to_string(),
                    stderr,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

/// HEAD commit id of a checkout, if it is a git repository with history.
pub fn head_revision(path: &Path) -> Option<String> {
    let repo = Repository::open(path).ok()?;
    let commit = repo.head().ok()?.peel_to_commit().ok()?;
    Some(commit.id().to_string())
}
