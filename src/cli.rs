//! CLI argument definitions using clap derive macros.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Fetch URLs and save them as timestamped JSON or text files.
///
/// Without flags, prompts for a single URL. With `--all` (or `-all`), fetches
/// every URL found in the data file, one after another.
#[derive(Parser, Debug)]
#[command(name = "grabber")]
#[command(author, version, about)]
pub struct Args {
    /// Fetch every URL found in the data file (also accepted as `-all`)
    #[arg(long)]
    pub all: bool,

    /// Directory for saved files [default: output/ beside the executable]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Input file scanned in batch mode [default: data.txt beside the executable]
    #[arg(short, long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Increase diagnostic verbosity on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show error diagnostics on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Rewrites the single-dash `-all` spelling to `--all` so clap accepts it.
///
/// Arguments after a `--` separator are left untouched.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                arg
            } else if arg == "-all" {
                OsString::from("--all")
            } else {
                arg
            }
        })
        .collect()
}
