//! Run mode and update branch naming

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::core::config::{
    FEATURE_BRANCH_NAME, FEATURE_COMMIT_MESSAGE, UPDATE_BRANCH_PREFIX, UPDATE_COMMIT_PREFIX,
    UPDATE_DATE_FORMAT,
};

/// How each folder is gated and published
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Upgrade clean default-branch checkouts onto a dated branch and open a PR
    #[default]
    Scheduled,
    /// Publish checkouts already sitting on the feature branch, skipping open PRs
    PullRequest,
}

/// Branch and commit naming shared by every folder in one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateTarget {
    pub branch: String,
    pub commit_message: String,
}

impl UpdateTarget {
    /// Dated naming for scheduled runs: same date, same branch
    pub fn for_date(date: NaiveDate) -> Self {
        let day = date.format(UPDATE_DATE_FORMAT);
        Self {
            branch: format!("{UPDATE_BRANCH_PREFIX}-{day}"),
            commit_message: format!("{UPDATE_COMMIT_PREFIX} {day}"),
        }
    }

    /// Fixed naming for pull-request mode
    pub fn feature_branch() -> Self {
        Self {
            branch: FEATURE_BRANCH_NAME.to_string(),
            commit_message: FEATURE_COMMIT_MESSAGE.to_string(),
        }
    }

    /// Naming for `mode`, dated with `today` when it needs a date
    pub fn for_mode(mode: Mode, today: NaiveDate) -> Self {
        match mode {
            Mode::Scheduled => Self::for_date(today),
            Mode::PullRequest => Self::feature_branch(),
        }
    }

    pub fn pr_title(&self) -> &str {
        &self.branch
    }

    pub fn pr_body(&self) -> &str {
        &self.commit_message
    }
}
