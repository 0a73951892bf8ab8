//! Git queries and branch operations for a single checkout

use anyhow::Result;
use std::path::Path;

use crate::core::command::{
    run_best_effort, run_checked, run_status, run_unchecked, CommandRunner, Invocation,
};
use crate::core::config::{DEFAULT_BRANCHES, GIT_TOOL, REMOTE_NAME};

// Git command arguments
const GIT_SHOW_CURRENT_ARGS: &[&str] = &["branch", "--show-current"];
const GIT_STATUS_PORCELAIN_ARGS: &[&str] = &["status", "--porcelain"];
const GIT_LS_REMOTE_HEADS_ARGS: &[&str] = &["ls-remote", "--exit-code", "--heads"];

fn git(args: &[&str]) -> Invocation {
    Invocation::new(GIT_TOOL, args.iter().copied())
}

/// Gets the name of the checked-out branch
/// Returns an empty string on a detached HEAD; fails if git exits non-zero
pub async fn current_branch(runner: &dyn CommandRunner, path: &Path) -> Result<String> {
    let output = run_checked(runner, path, git(GIT_SHOW_CURRENT_ARGS)).await?;
    Ok(output.stdout.trim().to_string())
}

/// True when `branch` is one of the primary branch names
pub fn is_default_branch_name(branch: &str) -> bool {
    DEFAULT_BRANCHES.contains(&branch)
}

/// Checks whether the checkout is on `master` or `main`
pub async fn is_default_branch(runner: &dyn CommandRunner, path: &Path) -> Result<bool> {
    let branch = current_branch(runner, path).await?;
    Ok(is_default_branch_name(&branch))
}

/// Checks whether the working tree has no pending changes
/// A failing status query counts as not clean
pub async fn is_clean(runner: &dyn CommandRunner, path: &Path) -> Result<bool> {
    let output = run_unchecked(runner, path, git(GIT_STATUS_PORCELAIN_ARGS)).await?;
    Ok(output.success && output.stdout.trim().is_empty())
}

/// Negation of [`is_clean`], re-queried every call
pub async fn is_dirty(runner: &dyn CommandRunner, path: &Path) -> Result<bool> {
    Ok(!is_clean(runner, path).await?)
}

/// Checks whether `origin` already has a head named `branch`
pub async fn remote_branch_exists(
    runner: &dyn CommandRunner,
    path: &Path,
    branch: &str,
) -> Result<bool> {
    let mut args = Vec::from(GIT_LS_REMOTE_HEADS_ARGS);
    args.push(REMOTE_NAME);
    args.push(branch);
    run_status(runner, path, git(&args)).await
}

/// Checks out an existing branch
pub async fn checkout(runner: &dyn CommandRunner, path: &Path, branch: &str) -> Result<()> {
    run_checked(runner, path, git(&["checkout", branch])).await?;
    Ok(())
}

/// Creates `branch` from HEAD and switches to it
pub async fn create_branch(runner: &dyn CommandRunner, path: &Path, branch: &str) -> Result<()> {
    run_checked(runner, path, git(&["checkout", "-b", branch])).await?;
    Ok(())
}

/// Force-deletes a local branch, ignoring failure (usually the branch does not exist)
pub async fn delete_branch(runner: &dyn CommandRunner, path: &Path, branch: &str) {
    run_best_effort(runner, path, git(&["branch", "-D", branch])).await;
}

/// Commits every tracked modification with `message`
pub async fn commit_all(runner: &dyn CommandRunner, path: &Path, message: &str) -> Result<()> {
    run_checked(runner, path, git(&["commit", "-am", message])).await?;
    Ok(())
}

/// Pushes `branch` to `origin`, overwriting whatever the remote has
pub async fn push_force(runner: &dyn CommandRunner, path: &Path, branch: &str) -> Result<()> {
    run_checked(runner, path, git(&["push", REMOTE_NAME, branch, "--force"])).await?;
    Ok(())
}
