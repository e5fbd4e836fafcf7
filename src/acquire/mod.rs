//! Repository acquisition
//!
//! Each configured provider is one unit of work: check out (or locate) its
//! code, scan it, and turn the scan into a profile. Units run on a bounded
//! worker pool and never affect each other; a failed unit only produces a
//! failure record.
//!
//! - `cloner` - the version-control seam and its `git` implementation
//! - `pool` - the worker pool and profile assembly
//! - `failures` - the failure log

mod cloner;
mod failures;
mod pool;

pub use cloner::{head_revision, Cloner, GitCliCloner};
pub use failures::{append_failures, reset_failure_log, FAILURE_SEPARATOR};
pub use pool::{build_profile, framework_signals, mine_providers, AcquireFailure, MineOutcome};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end one unit of work
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("git clone exited with {status}: {stderr}")]
    CloneFailed { status: String, stderr: String },

    #[error("clone timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("local checkout {} does not exist", .0.display())]
    MissingPath(PathBuf),

    #[error("provider has neither url nor path")]
    NoSource,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AcquireResult<T> = Result<T, AcquireError>;
