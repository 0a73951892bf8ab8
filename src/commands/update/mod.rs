//! Dependency update command implementation
//!
//! Lists the folders under the root, then runs the per-folder pipeline on each with
//! a fixed number of folders in flight. A failing folder is logged and the rest of
//! the batch carries on.

mod pipeline;
mod target;

use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::{Path, PathBuf};
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{error, info};

use crate::core::{
    assert_tooling, list_folders, set_terminal_title, set_terminal_title_and_flush,
    CommandRunner, SystemRunner, DONE_TITLE, NO_FOLDERS_MESSAGE, REQUIRED_TOOLS, RUNNING_TITLE,
    UPDATE_CONCURRENT_LIMIT,
};

pub use pipeline::{process_folder, FolderStatus, SkipReason};
pub use target::{Mode, UpdateTarget};

/// Outcome of one folder task
#[derive(Debug)]
pub struct FolderReport {
    /// Folder name for display, lossily converted when not UTF-8
    pub folder: String,
    pub path: PathBuf,
    pub outcome: Result<FolderStatus>,
}

impl FolderReport {
    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Handles the update command against real git, gh and yarn
pub async fn handle_update_command(root: &Path, mode: Mode) -> Result<()> {
    set_terminal_title(RUNNING_TITLE);

    let result = async {
        assert_tooling(REQUIRED_TOOLS).await?;

        let target = UpdateTarget::for_mode(mode, chrono::Local::now().date_naive());
        info!(?mode, branch = %target.branch, "Starting dependency sweep");

        run_sweep(&SystemRunner, root, mode, &target, UPDATE_CONCURRENT_LIMIT).await
    }
    .await;

    set_terminal_title_and_flush(DONE_TITLE);

    let reports = result?;
    let failed = reports.iter().filter(|r| r.is_error()).count();
    info!(folders = reports.len(), failed, "Dependency sweep finished");
    Ok(())
}

/// Runs the pipeline for every folder under `root`, at most `concurrency` at once
/// Returns one report per folder in folder-name order; only listing `root` can fail
pub async fn run_sweep(
    runner: &dyn CommandRunner,
    root: &Path,
    mode: Mode,
    target: &UpdateTarget,
    concurrency: usize,
) -> Result<Vec<FolderReport>> {
    let folders = list_folders(root).await?;
    if folders.is_empty() {
        info!("{NO_FOLDERS_MESSAGE}");
        return Ok(Vec::new());
    }

    let semaphore = Semaphore::new(concurrency.max(1));
    let mut futures = FuturesUnordered::new();

    for name in folders {
        let semaphore = &semaphore;
        futures.push(async move {
            let _permit = acquire_permit(semaphore).await;
            let path = root.join(&name);
            let folder = name.to_string_lossy().into_owned();

            let outcome = process_folder(runner, &path, mode, target).await;
            match &outcome {
                Ok(status) => info!(folder = %folder, "{status}"),
                Err(e) => error!(folder = %folder, "Error while updating folder: {e:#}"),
            }

            FolderReport {
                folder,
                path,
                outcome,
            }
        });
    }

    let mut reports = Vec::new();
    while let Some(report) = futures.next().await {
        reports.push(report);
    }

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(reports)
}

async fn acquire_permit(semaphore: &Semaphore) -> SemaphorePermit<'_> {
    semaphore
        .acquire()
        .await
        .expect("Failed to acquire semaphore permit for folder task")
}
