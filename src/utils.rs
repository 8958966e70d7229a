use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

use crate::package::{package_lines, parse_package};
use crate::types::Training;

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Map `-v`/`-q` counts to a level name.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
pub fn log_level(verbose: u8, quiet: u8) -> &'static str {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    }
}

/// Initialize colorful logging on stderr, stdout is reserved for reports.
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = log_level(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitcalc={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Read one package per line from `path`, skipping blanks and `#` comments.
pub fn load_packages(path: &Path) -> Result<Vec<Training>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading input: {}", path.display()))?;

    let mut out = Vec::new();
    for (line_no, line) in package_lines(&text) {
        let training = parse_package(line)
            .with_context(|| format!("{}:{line_no}: {line}", path.display()))?;
        out.push(training);
    }

    tracing::info!(path = %path.display(), packages = out.len(), "input loaded");
    Ok(out)
}
