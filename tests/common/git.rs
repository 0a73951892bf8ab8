//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

fn git(path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}

/// Sets up a git repository on `main` with user config
/// Returns Ok(()) on success, or an error if git is not available
pub fn setup_git_repo(path: &Path) -> Result<()> {
    git(path, &["init", "-q"]).map_err(|_| anyhow::anyhow!("Git not available - skipping test"))?;

    // Name the unborn branch regardless of init.defaultBranch
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;

    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;

    // Disable commit signing for tests
    git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(())
}

/// Creates a test commit in the repository
pub fn create_test_commit(path: &Path, file_name: &str, content: &str, message: &str) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;
    git(path, &["add", file_name])?;
    git(path, &["commit", "-q", "-m", message])
}

/// Creates a bare repository at `remote` and registers it as `origin` of `path`
pub fn add_bare_origin(path: &Path, remote: &Path) -> Result<()> {
    std::fs::create_dir_all(remote)?;
    git(remote, &["init", "-q", "--bare"])?;
    let url = remote.to_string_lossy().into_owned();
    git(path, &["remote", "add", "origin", &url])
}

/// Pushes `branch` of `path` to `origin`
pub fn push_branch(path: &Path, branch: &str) -> Result<()> {
    git(path, &["push", "-q", "origin", branch])
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
