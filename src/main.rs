//! CLI entry point for the grabber tool.

use std::process::ExitCode;

mod app;
mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match app::run_grabber().await {
        Ok(exit) => exit.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
