//! Public API for git operations.
//!
//! Read-only queries used by the inspector and the branch operations used by the
//! publisher. Every function takes the [`CommandRunner`](crate::core::CommandRunner)
//! to run git through and the checkout path.
//!
//! ## Example: Checking for changes
//!
//! ```rust,no_run
//! use depsweep::core::SystemRunner;
//! use depsweep::git::is_dirty;
//! use std::path::Path;
//!
//! async fn check(path: &Path) -> anyhow::Result<()> {
//!     if is_dirty(&SystemRunner, path).await? {
//!         println!("Repository has changes");
//!     }
//!     Ok(())
//! }
//! ```

// Queries
pub use super::operations::{
    current_branch, is_clean, is_default_branch, is_default_branch_name, is_dirty,
    remote_branch_exists,
};

// Branch operations
pub use super::operations::{checkout, commit_all, create_branch, delete_branch, push_force};
