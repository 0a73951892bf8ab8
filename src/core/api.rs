//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Folder discovery and tooling checks
//! - External command execution
//! - Repository inspection
//! - Configuration constants
//!
//! Internal implementation details are not exposed through this API.

// Command execution
pub use super::command::{
    run_best_effort, run_checked, run_status, run_unchecked, CommandOutput, CommandRunner,
    Invocation, SystemRunner,
};

// Discovery
pub use super::discovery::{assert_tool, assert_tooling, list_folders};

// Inspection
pub use super::inspect::{inspect, RepoInfo};

// Configuration
pub use super::config::{
    DEFAULT_BRANCHES, FEATURE_BRANCH_NAME, FEATURE_COMMIT_MESSAGE, REQUIRED_TOOLS,
    UPDATE_CONCURRENT_LIMIT,
};

// User-facing messages
pub use super::config::{DONE_TITLE, NO_FOLDERS_MESSAGE, RUNNING_TITLE};

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};
