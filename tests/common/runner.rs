//! Scripted command runner standing in for git, gh and npx

use anyhow::Result;
use async_trait::async_trait;
use depsweep::core::{CommandOutput, CommandRunner, Invocation};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Simulated state of one folder's checkout, remote and pull requests
#[derive(Clone, Debug)]
pub struct FolderScript {
    pub branch: String,
    pub clean: bool,
    /// The upgrade command leaves modified files behind
    pub upgrade_changes_files: bool,
    /// Remote heads that already exist
    pub remote_branches: Vec<String>,
    /// Title of the PR open for the current branch
    pub pr_title: Option<String>,
    /// Calls matching these (program, argument prefix) pairs exit non-zero
    pub failures: Vec<(String, Vec<String>)>,
    /// `git branch --show-current` fails, as outside a git checkout
    pub not_a_repo: bool,
}

impl FolderScript {
    pub fn on_branch(branch: &str) -> Self {
        Self {
            branch: branch.to_string(),
            clean: true,
            upgrade_changes_files: true,
            remote_branches: Vec::new(),
            pr_title: None,
            failures: Vec::new(),
            not_a_repo: false,
        }
    }

    pub fn dirty(mut self) -> Self {
        self.clean = false;
        self
    }

    pub fn upgrade_is_no_op(mut self) -> Self {
        self.upgrade_changes_files = false;
        self
    }

    pub fn with_remote_branch(mut self, branch: &str) -> Self {
        self.remote_branches.push(branch.to_string());
        self
    }

    pub fn with_open_pr(mut self, title: &str) -> Self {
        self.pr_title = Some(title.to_string());
        self
    }

    pub fn failing(mut self, program: &str, prefix: &[&str]) -> Self {
        self.failures.push((
            program.to_string(),
            prefix.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    pub fn not_a_repo(mut self) -> Self {
        self.not_a_repo = true;
        self
    }
}

#[derive(Default)]
struct Tracking {
    calls: Vec<(String, Invocation)>,
    in_flight: HashMap<String, usize>,
    max_folders_in_flight: usize,
}

/// Records every invocation per folder and answers from each folder's script
#[derive(Default)]
pub struct ScriptedRunner {
    scripts: Mutex<HashMap<String, FolderScript>>,
    tracking: Mutex<Tracking>,
    delay: Option<Duration>,
}

// Queries that never change a checkout, remote or pull request
const READ_ONLY: &[(&str, &[&str])] = &[
    ("git", &["branch", "--show-current"]),
    ("git", &["status"]),
    ("git", &["ls-remote"]),
    ("gh", &["pr", "status"]),
];

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps for `delay`, so folder tasks overlap
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn script(&self, folder: &str, script: FolderScript) {
        self.scripts
            .lock()
            .unwrap()
            .insert(folder.to_string(), script);
    }

    /// Rendered command lines run in `folder`, in call order
    pub fn calls_for(&self, folder: &str) -> Vec<String> {
        self.tracking
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(f, _)| f == folder)
            .map(|(_, inv)| inv.to_string())
            .collect()
    }

    /// Calls in `folder` that could change a checkout, a remote or a pull request
    pub fn mutating_calls_for(&self, folder: &str) -> Vec<String> {
        self.tracking
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(f, inv)| {
                f == folder
                    && !READ_ONLY
                        .iter()
                        .any(|(program, prefix)| inv.starts_with(program, prefix))
            })
            .map(|(_, inv)| inv.to_string())
            .collect()
    }

    pub fn max_folders_in_flight(&self) -> usize {
        self.tracking.lock().unwrap().max_folders_in_flight
    }

    pub fn state_of(&self, folder: &str) -> FolderScript {
        self.scripts.lock().unwrap()[folder].clone()
    }

    fn enter(&self, folder: &str, invocation: &Invocation) {
        let mut guard = self.tracking.lock().unwrap();
        let tracking = &mut *guard;
        tracking.calls.push((folder.to_string(), invocation.clone()));
        *tracking.in_flight.entry(folder.to_string()).or_insert(0) += 1;
        let folders = tracking.in_flight.len();
        tracking.max_folders_in_flight = tracking.max_folders_in_flight.max(folders);
    }

    fn leave(&self, folder: &str) {
        let mut guard = self.tracking.lock().unwrap();
        let remaining = guard.in_flight.get_mut(folder).map(|count| {
            *count -= 1;
            *count
        });
        if remaining == Some(0) {
            guard.in_flight.remove(folder);
        }
    }

    fn respond(&self, folder: &str, inv: &Invocation) -> CommandOutput {
        let mut scripts = self.scripts.lock().unwrap();
        let Some(state) = scripts.get_mut(folder) else {
            return CommandOutput::failed(format!("no script for {folder}"));
        };

        let scripted_failure = state.failures.iter().any(|(program, prefix)| {
            let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
            inv.starts_with(program, &prefix)
        });
        if scripted_failure {
            return CommandOutput::failed(format!("scripted failure: {inv}"));
        }

        let arg = |i: usize| inv.args.get(i).cloned().unwrap_or_default();

        if inv.starts_with("git", &["branch", "--show-current"]) {
            if state.not_a_repo {
                CommandOutput::failed("fatal: not a git repository")
            } else {
                CommandOutput::ok(state.branch.clone())
            }
        } else if inv.starts_with("git", &["status"]) {
            if state.not_a_repo {
                CommandOutput::failed("fatal: not a git repository")
            } else if state.clean {
                CommandOutput::ok("")
            } else {
                CommandOutput::ok(" M package.json")
            }
        } else if inv.starts_with("git", &["ls-remote"]) {
            let branch = inv.args.last().cloned().unwrap_or_default();
            if state.remote_branches.contains(&branch) {
                CommandOutput::ok(format!("abc123\trefs/heads/{branch}"))
            } else {
                CommandOutput::failed("")
            }
        } else if inv.starts_with("npx", &["yarn-upgrade-all"]) {
            if state.upgrade_changes_files {
                state.clean = false;
            }
            CommandOutput::ok("")
        } else if inv.starts_with("git", &["checkout", "-b"]) {
            state.branch = arg(2);
            CommandOutput::ok("")
        } else if inv.starts_with("git", &["checkout"]) {
            state.branch = arg(1);
            CommandOutput::ok("")
        } else if inv.starts_with("git", &["commit"]) {
            if state.clean {
                CommandOutput::failed("nothing to commit, working tree clean")
            } else {
                state.clean = true;
                CommandOutput::ok("")
            }
        } else if inv.starts_with("git", &["push"]) {
            state.remote_branches.push(arg(2));
            CommandOutput::ok("")
        } else if inv.starts_with("gh", &["pr", "status"]) {
            match &state.pr_title {
                Some(title) => CommandOutput::ok(format!(
                    r#"{{"currentBranch":{{"id":"PR_1","title":"{title}"}},"createdBy":[],"needsReview":[]}}"#
                )),
                None => CommandOutput::ok(r#"{"createdBy":[],"needsReview":[]}"#),
            }
        } else if inv.starts_with("gh", &["pr", "create"]) {
            state.pr_title = Some(arg(3));
            CommandOutput::ok("https://github.com/acme/repo/pull/1")
        } else {
            CommandOutput::ok("")
        }
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, dir: &Path, invocation: &Invocation) -> Result<CommandOutput> {
        let folder = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.enter(&folder, invocation);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let output = self.respond(&folder, invocation);
        self.leave(&folder);

        Ok(output)
    }
}
