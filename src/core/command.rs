//! External command execution
//!
//! Every git, gh and npx call goes through a [`CommandRunner`] as a program plus an
//! argument vector, never an interpolated shell string, so folder and branch names
//! reach the child process verbatim.

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, error};

use crate::error::SweepError;

/// One external command: program, arguments and extra environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            envs: Vec::new(),
        }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// True when the program matches and the arguments start with `prefix`
    pub fn starts_with(&self, program: &str, prefix: &[&str]) -> bool {
        self.program == program
            && self.args.len() >= prefix.len()
            && self.args.iter().zip(prefix).all(|(a, p)| a == p)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.envs {
            write!(f, "{key}={value} ")?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished child process
#[derive(Clone, Debug, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs external commands in a working directory
///
/// `Err` is reserved for commands that could not be started at all; a command that
/// ran and exited non-zero comes back as `Ok` with `success == false`.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, dir: &Path, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Spawns real child processes with `tokio::process`
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, dir: &Path, invocation: &Invocation) -> Result<CommandOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(dir)
            .output()
            .await?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Runs a command that must succeed
/// Returns the output, or `SweepError::CommandFailed` carrying the command line
pub async fn run_checked(
    runner: &dyn CommandRunner,
    dir: &Path,
    invocation: Invocation,
) -> Result<CommandOutput> {
    debug!(dir = %dir.display(), "running: {invocation}");
    let output = runner.run(dir, &invocation).await?;

    if !output.success {
        error!(dir = %dir.display(), stderr = %output.stderr, "command failed: {invocation}");
        return Err(SweepError::CommandFailed {
            command: invocation.to_string(),
            stderr: output.stderr,
        }
        .into());
    }

    Ok(output)
}

/// Runs a command whose outcome only matters as a yes/no answer
/// Returns whether it exited zero; spawn failures still propagate
pub async fn run_status(
    runner: &dyn CommandRunner,
    dir: &Path,
    invocation: Invocation,
) -> Result<bool> {
    Ok(run_unchecked(runner, dir, invocation).await?.success)
}

/// Runs a command and hands back its output whatever the exit status
/// Only a failure to spawn is an error
pub async fn run_unchecked(
    runner: &dyn CommandRunner,
    dir: &Path,
    invocation: Invocation,
) -> Result<CommandOutput> {
    debug!(dir = %dir.display(), "running: {invocation}");
    runner.run(dir, &invocation).await
}

/// Runs a command and ignores every failure, including failure to spawn
pub async fn run_best_effort(runner: &dyn CommandRunner, dir: &Path, invocation: Invocation) {
    debug!(dir = %dir.display(), "running (best effort): {invocation}");
    match runner.run(dir, &invocation).await {
        Ok(output) if !output.success => {
            debug!(dir = %dir.display(), stderr = %output.stderr, "ignored failure: {invocation}")
        }
        Err(e) => debug!(dir = %dir.display(), "ignored spawn error: {e}"),
        Ok(_) => {}
    }
}
