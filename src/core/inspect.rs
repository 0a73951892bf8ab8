//! Per-folder repository inspection

use anyhow::Result;
use std::path::Path;

use super::command::CommandRunner;
use crate::git::{current_branch, is_clean, is_default_branch};
use crate::package::{detect_kind, is_workspace, PackageKind};

/// Snapshot of a folder's project type and git state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoInfo {
    pub kind: PackageKind,
    /// Yarn workspace root; such folders are never updated
    pub is_workspace: bool,
    pub branch: String,
    /// On `master` or `main`
    pub is_default_branch: bool,
    /// No uncommitted changes
    pub is_clean: bool,
}

impl RepoInfo {
    pub fn is_dirty(&self) -> bool {
        !self.is_clean
    }
}

/// Gathers [`RepoInfo`] for the folder at `path`
///
/// All queries run concurrently. Fails only when the branch query fails (e.g. the
/// folder is not a git checkout); the filesystem checks never error.
pub async fn inspect(runner: &dyn CommandRunner, path: &Path) -> Result<RepoInfo> {
    let kind = async { Ok::<_, anyhow::Error>(detect_kind(path).await) };
    let workspace = async { Ok::<_, anyhow::Error>(is_workspace(path).await) };

    let (kind, is_workspace, branch, is_default_branch, is_clean) = tokio::try_join!(
        kind,
        workspace,
        current_branch(runner, path),
        is_default_branch(runner, path),
        is_clean(runner, path),
    )?;

    Ok(RepoInfo {
        kind,
        is_workspace,
        branch,
        is_default_branch,
        is_clean,
    })
}
