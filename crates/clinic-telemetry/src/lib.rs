//! # Clinic Telemetry
//!
//! Logging and metrics for the clinic registry.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters and gauges, text-encoded on demand
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clinic_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(config).expect("Failed to init telemetry");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CLINIC_SERVICE_NAME` | `clinic-registry` | Service name in logs |
//! | `CLINIC_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CLINIC_JSON_LOGS` | `false` | JSON output (default `true` in containers) |
//! | `CLINIC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `CLINIC_ENVIRONMENT` | `development` | Deployment environment label |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{encode_metrics, register_metrics, MetricsHandle};
pub use tracing_setup::{init_tracing, TracingGuard};

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Metrics registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Configuration could not be applied.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics_handle = register_metrics()?;
    let tracing_guard = init_tracing(&config)?;
    tracing::info!(
        service = %tracing_guard.service_name(),
        metrics = metrics_handle.registered(),
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        tracing: tracing_guard,
        metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    tracing: TracingGuard,
    metrics: MetricsHandle,
}

impl TelemetryGuard {
    /// Service name logs are tagged with.
    pub fn service_name(&self) -> &str {
        self.tracing.service_name()
    }

    /// Number of Prometheus collectors registered at startup.
    pub fn metrics_registered(&self) -> usize {
        self.metrics.registered()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.tracing.service_name(), "Shutting down telemetry...");
    }
}
