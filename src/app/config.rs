//! Run configuration: where output goes and where batch input comes from.
//!
//! Defaults live beside the executable; CLI flags override each one.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::Args;

/// Default output directory name, created beside the executable.
pub(crate) const OUTPUT_DIR_NAME: &str = "output";

/// Default batch input file name, looked up beside the executable.
pub(crate) const DATA_FILE_NAME: &str = "data.txt";

/// Resolved per-run paths, passed explicitly to the fetcher and batch runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunConfig {
    pub(crate) output_dir: PathBuf,
    pub(crate) data_file: PathBuf,
}

impl RunConfig {
    /// Applies CLI overrides on top of defaults rooted at `base_dir`.
    pub(crate) fn from_args(args: &Args, base_dir: &Path) -> Self {
        Self {
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| base_dir.join(OUTPUT_DIR_NAME)),
            data_file: args
                .data_file
                .clone()
                .unwrap_or_else(|| base_dir.join(DATA_FILE_NAME)),
        }
    }
}

/// Resolves the run configuration, touching the executable location only
/// when a default is actually needed.
pub(crate) fn resolve_run_config(args: &Args) -> Result<RunConfig> {
    if let (Some(output_dir), Some(data_file)) = (&args.output_dir, &args.data_file) {
        return Ok(RunConfig {
            output_dir: output_dir.clone(),
            data_file: data_file.clone(),
        });
    }
    let base_dir = executable_dir()?;
    Ok(RunConfig::from_args(args, &base_dir))
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine the executable location")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("executable path has no parent: {}", exe.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_run_config_defaults_beside_base_dir() {
        let args = Args::try_parse_from(["grabber"]).unwrap();
        let config = RunConfig::from_args(&args, Path::new("/opt/grabber"));
        assert_eq!(config.output_dir, PathBuf::from("/opt/grabber/output"));
        assert_eq!(config.data_file, PathBuf::from("/opt/grabber/data.txt"));
    }

    #[test]
    fn test_run_config_flags_override_defaults() {
        let args =
            Args::try_parse_from(["grabber", "-o", "/tmp/saved", "-d", "/tmp/urls.txt"]).unwrap();
        let config = RunConfig::from_args(&args, Path::new("/opt/grabber"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/saved"));
        assert_eq!(config.data_file, PathBuf::from("/tmp/urls.txt"));
    }

    #[test]
    fn test_resolve_run_config_with_both_overrides() {
        let args = Args::try_parse_from(["grabber", "-o", "out", "-d", "in.txt"]).unwrap();
        let config = resolve_run_config(&args).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.data_file, PathBuf::from("in.txt"));
    }

    #[test]
    fn test_resolve_run_config_defaults_use_executable_dir() {
        let args = Args::try_parse_from(["grabber"]).unwrap();
        let config = resolve_run_config(&args).unwrap();
        let exe_dir = executable_dir().unwrap();
        assert_eq!(config.output_dir, exe_dir.join(OUTPUT_DIR_NAME));
        assert_eq!(config.data_file, exe_dir.join(DATA_FILE_NAME));
    }
}
