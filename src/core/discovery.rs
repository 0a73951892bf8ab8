//! Folder discovery and pre-flight checks

use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::ffi::OsString;
use std::path::Path;

use crate::error::SweepError;

/// Lists the immediate subdirectories of `root`
/// Returns folder names sorted alphabetically; fails if `root` cannot be read
///
/// Names are kept as the OS reports them, so a name that is not valid UTF-8
/// still joins back onto `root`. Symlinks pointing at directories count as
/// folders. Nothing is filtered by content here; project detection happens per
/// folder later.
pub async fn list_folders(root: impl AsRef<Path>) -> Result<Vec<OsString>> {
    let root = root.as_ref();
    let mut entries = tokio::fs::read_dir(root)
        .await
        .with_context(|| format!("Failed to read directory {}", root.display()))?;

    let mut folders = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let is_dir = match entry.file_type().await {
            Ok(ft) if ft.is_symlink() => tokio::fs::metadata(entry.path())
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false),
            Ok(ft) => ft.is_dir(),
            Err(_) => false,
        };

        if is_dir {
            folders.push(entry.file_name());
        }
    }

    folders.sort();
    Ok(folders)
}

/// Checks that a single tool resolves on PATH
pub fn assert_tool(tool: &str) -> Result<()> {
    which::which(tool)
        .map(|_| ())
        .map_err(|_| SweepError::ToolingNotFound(tool.to_string()).into())
}

/// Checks every required tool concurrently
/// Fails with `SweepError::ToolingNotFound` naming a missing tool
pub async fn assert_tooling(tools: &[&str]) -> Result<()> {
    let checks = tools.iter().map(|tool| {
        let tool = tool.to_string();
        async move {
            tokio::task::spawn_blocking(move || assert_tool(&tool))
                .await
                .context("Tool lookup task panicked")?
        }
    });

    try_join_all(checks).await.map(|_| ())
}
