//! Yarn project detection and dependency upgrades

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::core::command::{run_checked, CommandRunner, Invocation};
use crate::core::config::{
    NPX_AUTO_CONFIRM_ENV, NPX_TOOL, PACKAGE_MANIFEST, YARN_LOCKFILE, YARN_UPGRADE_PACKAGE,
};

/// package.json structure (partial)
#[derive(Deserialize)]
struct PackageJson {
    workspaces: Option<Value>,
}

/// Checks for a yarn lockfile
pub async fn detect(repo_path: &Path) -> bool {
    tokio::fs::try_exists(repo_path.join(YARN_LOCKFILE))
        .await
        .unwrap_or(false)
}

/// Checks whether package.json declares a non-empty `workspaces` field
/// A missing or unparseable manifest is not a workspace
pub async fn declares_workspaces(repo_path: &Path) -> bool {
    let Ok(content) = tokio::fs::read_to_string(repo_path.join(PACKAGE_MANIFEST)).await else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<PackageJson>(&content) else {
        return false;
    };

    manifest.workspaces.as_ref().is_some_and(non_empty_workspaces)
}

// Accepts both `"workspaces": [...]` and `"workspaces": {"packages": [...]}`
fn non_empty_workspaces(value: &Value) -> bool {
    match value {
        Value::Array(globs) => !globs.is_empty(),
        Value::Object(map) => map
            .get("packages")
            .and_then(Value::as_array)
            .is_some_and(|packages| !packages.is_empty()),
        Value::String(glob) => !glob.is_empty(),
        _ => false,
    }
}

/// Upgrades every dependency to its latest version, non-interactively
pub async fn upgrade_all(runner: &dyn CommandRunner, repo_path: &Path) -> Result<()> {
    info!(folder = %repo_path.display(), "Updating yarn deps");

    let (key, value) = NPX_AUTO_CONFIRM_ENV;
    let invocation = Invocation::new(NPX_TOOL, [YARN_UPGRADE_PACKAGE]).env(key, value);
    run_checked(runner, repo_path, invocation).await?;
    Ok(())
}
