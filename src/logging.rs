//! Tracing subscriber setup for hosts embedding the editor.
//!
//! The library itself only emits `tracing` events; call [`init`] once from
//! the host to see them. `RUST_LOG` overrides the default directive.

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, or by
/// `default_directive` (e.g. `"paintcrop=debug"`) when unset.
pub fn init(default_directive: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .with_context(|| format!("invalid log directive: {default_directive}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
