//! # depsweep
//!
//! `depsweep` bulk-updates dependencies across sibling git checkouts and opens a
//! pull request for every folder that changed. It powers the `depsweep` CLI tool.
//!
//! ## Core Features
//!
//! - **Folder Scanning**: every immediate subdirectory of the working directory is a
//!   candidate checkout.
//! - **Inspection**: lockfile-based project detection plus branch and cleanliness
//!   queries, run concurrently per folder.
//! - **Updating**: `yarn-upgrade-all` for yarn projects; Python is a stub.
//! - **Publishing**: dated branch, commit, force-push and `gh pr create`, then the
//!   original branch is restored.
//!
//! ## Example
//!
//! ```rust,no_run
//! use depsweep::commands::update::{run_sweep, Mode, UpdateTarget};
//! use depsweep::core::SystemRunner;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let today = chrono::Local::now().date_naive();
//!     let target = UpdateTarget::for_date(today);
//!     let reports = run_sweep(&SystemRunner, Path::new("."), Mode::Scheduled, &target, 5).await?;
//!     for report in reports {
//!         println!("{}: {:?}", report.folder, report.outcome);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod error;
pub mod git;
pub mod github;
pub mod package;
pub mod utils;

pub use error::SweepError;
