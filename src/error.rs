//! Error conditions raised by the sweep
//!
//! Every fallible function returns `anyhow::Result`; the variants here are the
//! conditions callers (and tests) care to tell apart, recoverable through
//! `anyhow::Error::downcast_ref`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// A must-succeed external command exited non-zero
    #[error("Error executing command: {command}")]
    CommandFailed { command: String, stderr: String },

    /// A required tool does not resolve on PATH
    #[error("Tooling not found: {0}")]
    ToolingNotFound(String),

    /// The folder has neither a yarn lockfile nor a requirements file
    #[error("Unknown repo type: {0}")]
    UnknownRepoType(String),
}
