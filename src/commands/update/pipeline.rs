//! Per-folder update pipeline
//!
//! inspect → gate → update → dirtiness gate → publish → restore. Gates end the
//! pipeline with a [`FolderStatus::Skipped`]; command failures end it with `Err`.

use anyhow::Result;
use std::fmt;
use std::path::Path;
use tracing::info;

use super::target::{Mode, UpdateTarget};
use crate::core::{inspect, CommandRunner, RepoInfo};
use crate::git::{
    checkout, commit_all, create_branch, delete_branch, is_dirty, push_force,
    remote_branch_exists,
};
use crate::github::{create_pr, current_branch_pr_title};
use crate::package::{update_dependencies, PackageKind};

/// Why a folder was left alone
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Yarn workspace root
    Workspace,
    /// No supported package manager for this mode
    UnsupportedKind(PackageKind),
    /// Scheduled mode needs a clean `master`/`main` checkout
    NotDefaultOrDirty { branch: String, clean: bool },
    /// Pull-request mode needs the feature branch checked out
    WrongBranch(String),
    /// The dated branch is already on the remote
    AlreadyPublished(String),
    /// The upgrade changed nothing
    NoUpdates,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Workspace => write!(f, "cannot process yarn workspace"),
            SkipReason::UnsupportedKind(PackageKind::None) => write!(f, "unknown folder"),
            SkipReason::UnsupportedKind(kind) => write!(f, "not yarn ({kind})"),
            SkipReason::NotDefaultOrDirty { branch, clean } => {
                write!(f, "not master / clean (branch: {branch:?}, clean: {clean})")
            }
            SkipReason::WrongBranch(branch) => write!(f, "not correct branch: {branch:?}"),
            SkipReason::AlreadyPublished(branch) => write!(f, "origin already has {branch}"),
            SkipReason::NoUpdates => write!(f, "no updates"),
        }
    }
}

/// Result of a folder that did not fail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FolderStatus {
    /// A pull request was opened
    Published,
    /// The branch already has an open pull request with this title
    PrExists(String),
    Skipped(SkipReason),
}

impl FolderStatus {
    /// Returns the emoji symbol for this status
    pub fn symbol(&self) -> &str {
        match self {
            FolderStatus::Published => "🟢",
            FolderStatus::PrExists(_) => "🟡",
            FolderStatus::Skipped(_) => "🟠",
        }
    }

    /// Returns the text representation of this status
    pub fn text(&self) -> &str {
        match self {
            FolderStatus::Published => "pr-created",
            FolderStatus::PrExists(_) => "pr-exists",
            FolderStatus::Skipped(_) => "skip",
        }
    }
}

impl fmt::Display for FolderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderStatus::Published => write!(f, "{} {}", self.symbol(), self.text()),
            FolderStatus::PrExists(title) => {
                write!(f, "{} {}: {title}", self.symbol(), self.text())
            }
            FolderStatus::Skipped(reason) => write!(f, "{} {}: {reason}", self.symbol(), self.text()),
        }
    }
}

fn skip(reason: SkipReason) -> Result<FolderStatus> {
    Ok(FolderStatus::Skipped(reason))
}

/// Runs the whole pipeline for the folder at `path`
pub async fn process_folder(
    runner: &dyn CommandRunner,
    path: &Path,
    mode: Mode,
    target: &UpdateTarget,
) -> Result<FolderStatus> {
    let info = inspect(runner, path).await?;

    match mode {
        Mode::Scheduled => scheduled_update(runner, path, &info, target).await,
        Mode::PullRequest => publish_feature_branch(runner, path, &info, target).await,
    }
}

async fn scheduled_update(
    runner: &dyn CommandRunner,
    path: &Path,
    info: &RepoInfo,
    target: &UpdateTarget,
) -> Result<FolderStatus> {
    if info.is_workspace {
        return skip(SkipReason::Workspace);
    }

    if !info.kind.is_known() {
        return skip(SkipReason::UnsupportedKind(info.kind));
    }

    if !info.is_default_branch || !info.is_clean {
        return skip(SkipReason::NotDefaultOrDirty {
            branch: info.branch.clone(),
            clean: info.is_clean,
        });
    }

    if remote_branch_exists(runner, path, &target.branch).await? {
        return skip(SkipReason::AlreadyPublished(target.branch.clone()));
    }

    update_dependencies(runner, path, info.kind).await?;

    if !is_dirty(runner, path).await? {
        return skip(SkipReason::NoUpdates);
    }

    delete_branch(runner, path, &target.branch).await;
    create_branch(runner, path, &target.branch).await?;
    commit_all(runner, path, &target.commit_message).await?;
    push_force(runner, path, &target.branch).await?;

    info!(folder = %path.display(), branch = %target.branch, "Creating PR");
    create_pr(runner, path, target.pr_title(), target.pr_body()).await?;

    checkout(runner, path, &info.branch).await?;

    Ok(FolderStatus::Published)
}

async fn publish_feature_branch(
    runner: &dyn CommandRunner,
    path: &Path,
    info: &RepoInfo,
    target: &UpdateTarget,
) -> Result<FolderStatus> {
    if info.branch != target.branch {
        return skip(SkipReason::WrongBranch(info.branch.clone()));
    }

    if info.is_workspace {
        return skip(SkipReason::Workspace);
    }

    if info.kind != PackageKind::Yarn {
        return skip(SkipReason::UnsupportedKind(info.kind));
    }

    if !remote_branch_exists(runner, path, &target.branch).await? {
        if info.is_dirty() {
            info!(folder = %path.display(), "Committing...");
            commit_all(runner, path, &target.commit_message).await?;
        }
        info!(folder = %path.display(), "Pushing...");
        push_force(runner, path, &target.branch).await?;
    }

    if let Some(title) = current_branch_pr_title(runner, path).await? {
        return Ok(FolderStatus::PrExists(title));
    }

    info!(folder = %path.display(), branch = %target.branch, "Creating PR");
    create_pr(runner, path, target.pr_title(), target.pr_body()).await?;

    Ok(FolderStatus::Published)
}
