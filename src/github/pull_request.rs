//! Pull request creation and lookup through the `gh` CLI

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::core::command::{run_checked, CommandRunner, Invocation};
use crate::core::config::GH_TOOL;

const GH_PR_STATUS_ARGS: &[&str] = &["pr", "status", "--json", "id,title"];

/// `gh pr status --json id,title` output (partial)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrStatus {
    pub current_branch: Option<PrSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// Opens a pull request for the checked-out branch
pub async fn create_pr(
    runner: &dyn CommandRunner,
    path: &Path,
    title: &str,
    body: &str,
) -> Result<()> {
    let invocation = Invocation::new(GH_TOOL, ["pr", "create", "--title", title, "--body", body]);
    run_checked(runner, path, invocation).await?;
    Ok(())
}

/// Queries pull request status for the repository at `path`
pub async fn pr_status(runner: &dyn CommandRunner, path: &Path) -> Result<PrStatus> {
    info!(folder = %path.display(), "Getting PR info");
    let invocation = Invocation::new(GH_TOOL, GH_PR_STATUS_ARGS.iter().copied());
    let output = run_checked(runner, path, invocation).await?;
    parse_pr_status(&output.stdout)
}

/// Parses `gh pr status` JSON
pub fn parse_pr_status(json: &str) -> Result<PrStatus> {
    serde_json::from_str(json).context("Failed to parse gh pr status output")
}

/// Title of the pull request opened from the checked-out branch, if any
/// An empty title counts as no pull request
pub async fn current_branch_pr_title(
    runner: &dyn CommandRunner,
    path: &Path,
) -> Result<Option<String>> {
    let status = pr_status(runner, path).await?;
    Ok(status
        .current_branch
        .map(|pr| pr.title)
        .filter(|title| !title.is_empty()))
}
