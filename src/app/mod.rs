//! Application wiring for the grabber binary: mode selection and run lifecycle.

pub(crate) mod batch;
pub(crate) mod config;
pub(crate) mod interactive;
pub(crate) mod report;
pub(crate) mod terminal;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use grabber_core::{FetchConfig, Fetcher};
use tracing::{debug, info};

use crate::cli::{Args, normalize_legacy_args};

/// Process outcome mapped to the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    /// Exit status 0.
    Success,
    /// Exit status 1.
    Failure,
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        match exit {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::FAILURE,
        }
    }
}

pub(crate) async fn run_grabber() -> Result<ProcessExit> {
    let args = Args::parse_from(normalize_legacy_args(std::env::args_os()));

    terminal::init_tracing(terminal::resolve_default_log_level(args.verbose, args.quiet));
    debug!(?args, "CLI arguments parsed");

    let run_config = config::resolve_run_config(&args)?;
    info!(
        output_dir = %run_config.output_dir.display(),
        batch = args.all,
        "Grabber starting"
    );

    let fetcher = Fetcher::new(FetchConfig::new(run_config.output_dir.clone()))
        .context("could not initialise the HTTP client")?;

    if args.all {
        Ok(batch::run_batch(&fetcher, &run_config.data_file).await)
    } else {
        interactive::run_interactive(&fetcher).await
    }
}
