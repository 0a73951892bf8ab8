//! GitHub pull request handling via the `gh` CLI

pub mod pull_request;

pub use pull_request::{
    create_pr, current_branch_pr_title, parse_pr_status, pr_status, PrStatus, PrSummary,
};
