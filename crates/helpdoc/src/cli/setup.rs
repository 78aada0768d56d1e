//! Global setup utilities for CLI initialization

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default log level when `RUST_LOG` is not set
pub const fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - Environment filter (`RUST_LOG`, defaults to WARN, or DEBUG with `--verbose`)
/// - Stderr output, so stdout only carries the summary line
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing(verbose: bool) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(default_level(false), Level::WARN);
    }

    #[test]
    fn test_verbose_level_is_debug() {
        assert_eq!(default_level(true), Level::DEBUG);
    }
}
