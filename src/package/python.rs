//! Python project detection

use anyhow::Result;
use std::path::Path;
use tracing::warn;

use crate::core::config::PYTHON_REQUIREMENTS;

/// Checks for a pip requirements file
pub async fn detect(repo_path: &Path) -> bool {
    tokio::fs::try_exists(repo_path.join(PYTHON_REQUIREMENTS))
        .await
        .unwrap_or(false)
}

/// Placeholder for Python dependency upgrades
///
/// Not implemented: logs what it would do and leaves the checkout untouched, so the
/// pipeline's dirtiness check always reports "no updates" for Python folders.
pub async fn upgrade_all(repo_path: &Path) -> Result<()> {
    warn!(folder = %repo_path.display(), "Python dependency updates are not implemented yet, leaving folder untouched");
    Ok(())
}
