//! Interactive mode: prompt for one URL on stdin and fetch it.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use grabber_core::Fetcher;
use tracing::debug;

use super::ProcessExit;
use super::report::report_fetch;

pub(crate) const PROMPT: &str = "Enter URL to download: ";

pub(crate) async fn run_interactive(fetcher: &Fetcher) -> Result<ProcessExit> {
    let url = {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        prompt_for_url(&mut stdin.lock(), &mut stdout).context("failed to read URL from stdin")?
    };
    debug!(url = %url, "URL entered");

    report_fetch(&fetcher.fetch(&url).await);
    Ok(ProcessExit::Success)
}

/// Writes the prompt and reads one line, without its line ending.
///
/// End of input yields an empty string.
pub(crate) fn prompt_for_url<R, W>(input: &mut R, output: &mut W) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
