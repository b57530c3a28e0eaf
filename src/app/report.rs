//! Console report lines for fetch outcomes (stdout).

use grabber_core::{FetchError, FetchedFile};
use tracing::warn;

/// Prints the outcome of one fetch and returns whether a file was saved.
pub(crate) fn report_fetch(outcome: &Result<FetchedFile, FetchError>) -> bool {
    match outcome {
        Ok(saved) => {
            println!("{}", saved_line(saved));
            true
        }
        Err(e) => {
            warn!(error = %e, "fetch failed");
            println!("{}", failure_line(e));
            false
        }
    }
}

pub(crate) fn saved_line(saved: &FetchedFile) -> String {
    format!("File saved as: {}", saved.filename)
}

pub(crate) fn failure_line(error: &FetchError) -> String {
    if error.is_request_failure() {
        format!("Error downloading file: {error}")
    } else {
        format!("Error saving file: {error}")
    }
}

pub(crate) fn summary_line(saved: usize, failed: usize) -> String {
    format!("Saved {saved} of {} URLs ({failed} failed)", saved + failed)
}
