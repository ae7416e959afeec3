// Path: crates/telemetry/src/init.rs
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// The filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Failures while installing the global subscriber.
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },
    #[error("failed to bridge `log` records into `tracing`: {0}")]
    LogBridge(String),
    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Initializes the global `tracing` subscriber for structured JSON logging,
/// honouring `RUST_LOG` and falling back to [`DEFAULT_FILTER`].
pub fn init_tracing() -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Like [`init_tracing`], but with an explicit filter directive such as
/// `"ledger=debug,info"`.
pub fn init_tracing_with_filter(directives: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(directives).map_err(|e| TelemetryError::Filter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })?;
    install(filter)
}

fn install(filter: EnvFilter) -> Result<(), TelemetryError> {
    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing_log::LogTracer::init().map_err(|e| TelemetryError::LogBridge(e.to_string()))?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TelemetryError::AlreadyInstalled(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_directives() {
        let err = init_tracing_with_filter("ledger=notalevel").unwrap_err();
        assert!(matches!(err, TelemetryError::Filter { .. }));
    }
}
