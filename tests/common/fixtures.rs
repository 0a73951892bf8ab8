//! Folder layouts for sweep tests

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// A scratch working directory holding sibling project folders
pub struct SweepRoot {
    pub temp_dir: TempDir,
}

impl SweepRoot {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates `name` containing the given (file, content) pairs
    pub fn folder(&self, name: &str, files: &[(&str, &str)]) -> Result<&Self> {
        let dir = self.path().join(name);
        std::fs::create_dir_all(&dir)?;
        for (file, content) in files {
            std::fs::write(dir.join(file), content)?;
        }
        Ok(self)
    }

    pub fn yarn_folder(&self, name: &str) -> Result<&Self> {
        self.folder(
            name,
            &[
                ("yarn.lock", "# yarn lockfile v1\n"),
                ("package.json", r#"{"name": "app", "version": "1.0.0"}"#),
            ],
        )
    }

    pub fn yarn_workspace_folder(&self, name: &str) -> Result<&Self> {
        self.folder(
            name,
            &[
                ("yarn.lock", "# yarn lockfile v1\n"),
                ("package.json", r#"{"private": true, "workspaces": ["packages/*"]}"#),
            ],
        )
    }

    pub fn python_folder(&self, name: &str) -> Result<&Self> {
        self.folder(name, &[("requirements.txt", "requests==2.31.0\n")])
    }

    pub fn plain_folder(&self, name: &str) -> Result<&Self> {
        self.folder(name, &[("README.md", "# nothing to update\n")])
    }
}
