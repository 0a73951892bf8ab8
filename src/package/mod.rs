//! Package manager detection and dependency upgrades

pub mod python;
pub mod yarn;

use anyhow::Result;
use std::fmt;
use std::path::Path;

use crate::core::CommandRunner;
use crate::error::SweepError;

/// Package manager governing a folder, decided by lockfile presence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageKind {
    /// Neither `yarn.lock` nor `requirements.txt`
    None,
    Yarn,
    Python,
}

impl PackageKind {
    /// Returns the display name for this kind
    pub fn name(&self) -> &str {
        match self {
            PackageKind::None => "none",
            PackageKind::Yarn => "yarn",
            PackageKind::Python => "python",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PackageKind::None)
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detects the package manager for a folder
/// Yarn wins when both markers are present
pub async fn detect_kind(path: &Path) -> PackageKind {
    if yarn::detect(path).await {
        PackageKind::Yarn
    } else if python::detect(path).await {
        PackageKind::Python
    } else {
        PackageKind::None
    }
}

/// Checks whether the folder is the root of a yarn workspace
pub async fn is_workspace(path: &Path) -> bool {
    detect_kind(path).await == PackageKind::Yarn && yarn::declares_workspaces(path).await
}

/// Runs the dependency upgrade matching `kind`
pub async fn update_dependencies(
    runner: &dyn CommandRunner,
    path: &Path,
    kind: PackageKind,
) -> Result<()> {
    match kind {
        PackageKind::Yarn => yarn::upgrade_all(runner, path).await,
        PackageKind::Python => python::upgrade_all(path).await,
        PackageKind::None => Err(SweepError::UnknownRepoType(path.display().to_string()).into()),
    }
}
