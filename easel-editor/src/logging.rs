// Tracing setup for applications embedding the editor.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info,easel_editor=debug,easel_model=debug";

/// Install a global fmt subscriber. `RUST_LOG` wins over `default_directive`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .with_context(|| format!("parse log directive: {default_directive}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::debug!("tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_tracing(DEFAULT_LOG_DIRECTIVE);
        assert!(init_tracing("warn").is_err());
    }
}
