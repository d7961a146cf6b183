//! Error types for file-shred
//!
//! Every failure carries the phase it happened in and, for failures inside the
//! overwrite loop, the 1-based index of the pass that failed. The first
//! failure aborts the remaining passes; nothing is retried or rolled back.
//!
//! ```text
//!   Stat ─► Open ─► ┌ Seek ─► Write ─► Sync ─► (Verify) ┐ ─► Unlink
//!                   └────────────── per pass ───────────┘
//! ```
//!
//! An [`WipeError::Unlink`] means every pass completed and the content is
//! gone, only the directory entry survived. Any other variant raised after
//! the first write means the file is in an unknown, partially overwritten
//! state.

use crate::crypto::secure_rng::RngError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;


/// Phase of a wipe invocation in which a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WipePhase {
    Resolve,
    Stat,
    Open,
    Plan,
    Seek,
    Write,
    Sync,
    Verify,
    Unlink,
}

impl fmt::Display for WipePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WipePhase::Resolve => "resolve",
            WipePhase::Stat => "stat",
            WipePhase::Open => "open",
            WipePhase::Plan => "plan",
            WipePhase::Seek => "seek",
            WipePhase::Write => "write",
            WipePhase::Sync => "sync",
            WipePhase::Verify => "verify",
            WipePhase::Unlink => "unlink",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum WipeError {
    #[error("{} is not a regular file", .path.display())]
    InvalidTarget { path: PathBuf },

    #[error("unable to check {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seek failed on pass {pass}: {source}")]
    Seek {
        pass: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed on pass {pass} at offset {offset}: {source}")]
    Write {
        pass: usize,
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("sync failed on pass {pass}: {source}")]
    Sync {
        pass: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("secure random source failed{}: {source}", pass_suffix(.pass))]
    RandomSource {
        pass: Option<usize>,
        #[source]
        source: RngError,
    },

    #[error("verification failed on pass {pass} at offset {offset}: expected 0x{expected:02x}, found 0x{found:02x}")]
    Verification {
        pass: usize,
        offset: u64,
        expected: u8,
        found: u8,
    },

    #[error("read-back failed on pass {pass}: {source}")]
    ReadBack {
        pass: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("content destroyed but {} could not be removed: {source}", .path.display())]
    Unlink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown deletion method: '{0}'")]
    UnknownMethod(String),
}

fn pass_suffix(pass: &Option<usize>) -> String {
    match pass {
        Some(pass) => format!(" on pass {}", pass),
        None => String::new(),
    }
}

impl WipeError {
    /// Phase in which this error was raised
    pub fn phase(&self) -> WipePhase {
        match self {
            WipeError::UnknownMethod(_) => WipePhase::Resolve,
            WipeError::InvalidTarget { .. } | WipeError::Stat { .. } => WipePhase::Stat,
            WipeError::Open { .. } => WipePhase::Open,
            WipeError::Seek { .. } => WipePhase::Seek,
            WipeError::Write { .. } => WipePhase::Write,
            WipeError::Sync { .. } => WipePhase::Sync,
            WipeError::RandomSource { pass: None, .. } => WipePhase::Plan,
            WipeError::RandomSource { pass: Some(_), .. } => WipePhase::Write,
            WipeError::Verification { .. } | WipeError::ReadBack { .. } => WipePhase::Verify,
            WipeError::Unlink { .. } => WipePhase::Unlink,
        }
    }

    /// 1-based index of the failing pass, for failures inside the overwrite loop
    pub fn pass_index(&self) -> Option<usize> {
        match self {
            WipeError::Seek { pass, .. }
            | WipeError::Write { pass, .. }
            | WipeError::Sync { pass, .. }
            | WipeError::Verification { pass, .. }
            | WipeError::ReadBack { pass, .. } => Some(*pass),
            WipeError::RandomSource { pass, .. } => *pass,
            _ => None,
        }
    }

    /// True when every pass completed and only the directory entry survived
    pub fn content_destroyed(&self) -> bool {
        matches!(self, WipeError::Unlink { .. })
    }

    /// True when the target may hold partially overwritten content
    pub fn is_overwrite_failure(&self) -> bool {
        self.pass_index().is_some()
    }
}

pub type WipeResult<T> = Result<T, WipeError>;
