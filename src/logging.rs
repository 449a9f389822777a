//! Logging setup.
//!
//! Per-file status lines go through `tracing` to stdout; prompts and
//! ffmpeg's own stderr stay separate. `RUST_LOG` overrides the default
//! `info` level.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_level(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
