//! Diagnostic logging setup. Stdout is reserved for the console report.

/// Maps the verbosity flags to a default filter directive.
///
/// Priority: quiet flag > verbose count > default (warn).
pub(crate) fn resolve_default_log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber on stderr. `RUST_LOG` overrides `default_level`.
pub(crate) fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
