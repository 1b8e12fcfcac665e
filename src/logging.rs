// Tracing subscriber setup for the command-line binary.
// The library only emits events; installing a subscriber is left to binaries.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{GhorgError, Result};

/// Parse a level name such as `info` or `DEBUG`.
pub fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse()
        .map_err(|_| GhorgError::Config(format!("unknown log level {:?}", level)))
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` directives take precedence
/// over `default_level`.
pub fn init(default_level: Level) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| GhorgError::Config(format!("failed to install logger: {}", e)))
}
