//! depsweep: bulk dependency updates across sibling git checkouts
//! Scans the working directory's subfolders, upgrades each one's dependencies and
//! opens a pull request for every folder that changed.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use depsweep::commands::update::{handle_update_command, Mode};

#[derive(Parser)]
#[command(name = "depsweep")]
#[command(about = "Update dependencies and open pull requests across sibling repositories")]
#[command(version)]
struct Cli {
    /// Which folders to touch and how to publish them
    #[arg(long, value_enum, default_value_t = Mode::Scheduled)]
    mode: Mode,

    /// Directory whose subfolders are processed
    #[arg(short = 'C', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Log every external command
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "depsweep=debug" } else { "depsweep=info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    handle_update_command(&cli.dir, cli.mode).await
}
