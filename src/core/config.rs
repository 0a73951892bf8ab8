//! Configuration constants and settings

// Concurrency Configuration
//
// Folder tasks mostly wait on git, gh and npx child processes. Five at a time keeps
// the hosting API and the package registry from throttling the run.
pub const UPDATE_CONCURRENT_LIMIT: usize = 5;

// Branches considered the repository's primary branch
pub const DEFAULT_BRANCHES: &[&str] = &["master", "main"];

// Remote that update branches are pushed to
pub const REMOTE_NAME: &str = "origin";

// Filesystem markers for project detection
pub const YARN_LOCKFILE: &str = "yarn.lock";
pub const PYTHON_REQUIREMENTS: &str = "requirements.txt";
pub const PACKAGE_MANIFEST: &str = "package.json";

// Scheduled update naming: `<prefix>-<d>-<m>-<yyyy>`
pub const UPDATE_BRANCH_PREFIX: &str = "chore/update-dependencies";
pub const UPDATE_COMMIT_PREFIX: &str = "Updating dependencies";
pub const UPDATE_DATE_FORMAT: &str = "%-d-%-m-%Y";

// Pull-request mode works on a fixed, hand-prepared branch
pub const FEATURE_BRANCH_NAME: &str = "feature/update-dependencies";
pub const FEATURE_COMMIT_MESSAGE: &str = "Update dependencies";

// Tools that must resolve on PATH before anything runs
pub const GH_TOOL: &str = "gh";
pub const GIT_TOOL: &str = "git";
pub const YARN_TOOL: &str = "yarn";
pub const REQUIRED_TOOLS: &[&str] = &[GH_TOOL, GIT_TOOL, YARN_TOOL];

// Yarn upgrade invocation
pub const NPX_TOOL: &str = "npx";
pub const YARN_UPGRADE_PACKAGE: &str = "yarn-upgrade-all";
pub const NPX_AUTO_CONFIRM_ENV: (&str, &str) = ("npm_config_yes", "true");

// UI Constants
pub const NO_FOLDERS_MESSAGE: &str = "No folders found in working directory.";
pub const RUNNING_TITLE: &str = "📦 depsweep";
pub const DONE_TITLE: &str = "✅ depsweep";
