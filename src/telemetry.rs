use crate::config::config;
use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber. Level comes from config, RUST_LOG
/// overrides it. JSON output is opt-in for log shippers.
pub fn init_telemetry() -> Result<()> {
    let log_level = config()
        .map(|cfg| cfg.observability.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let json_logs = config()
        .map(|cfg| cfg.observability.json_logs)
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json_logs {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    }

    Ok(())
}
