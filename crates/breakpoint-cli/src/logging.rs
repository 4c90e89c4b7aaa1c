//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so that command output on stdout (tables, JSON) stays
//! clean. `RUST_LOG` overrides the level chosen from `--verbose`.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogFormat;

/// Crates whose events are shown by default.
const LOG_TARGETS: &[&str] = &["breakpoint", "breakpoint_cli", "tower_http"];

/// Build the default filter directive for a verbosity setting.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup.
pub fn init_logging(verbose: bool, format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let ansi = io::stderr().is_terminal();

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_ansi(ansi)
                    .with_target(false),
            )
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(ansi)
                    .with_target(verbose),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive(false),
            "breakpoint=info,breakpoint_cli=info,tower_http=info"
        );
        assert!(default_directive(true).contains("breakpoint=debug"));
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
