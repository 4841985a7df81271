//! Prometheus metrics for the clinic registry.
//!
//! All metrics follow the naming convention: `clinic_<metric>[_<unit>]`
//!
//! Metrics update from the moment they are first touched; they only show up
//! in [`encode_metrics`] output after [`register_metrics`] has run.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Doctors registered across all live registries
    pub static ref DOCTORS_REGISTERED: IntGauge = IntGauge::new(
        "clinic_doctors_registered",
        "Number of doctors currently registered"
    ).expect("metric creation failed");

    /// Total appointments booked
    pub static ref APPOINTMENTS_BOOKED: IntCounter = IntCounter::new(
        "clinic_appointments_booked_total",
        "Total number of appointments booked"
    ).expect("metric creation failed");

    /// Status transitions by target status
    pub static ref APPOINTMENT_TRANSITIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("clinic_appointment_transitions_total", "Appointment status transitions"),
        &["status"]  // status: confirmed/canceled
    ).expect("metric creation failed");

    /// Rejected operations by error type
    pub static ref REGISTRY_ERRORS: IntCounterVec = IntCounterVec::new(
        Opts::new("clinic_registry_errors_total", "Rejected registry operations by error type"),
        &["error_type"]
    ).expect("metric creation failed");
}

/// Handle proving metrics were registered.
#[derive(Debug)]
pub struct MetricsHandle {
    registered: usize,
}

impl MetricsHandle {
    /// Number of collectors registered.
    pub fn registered(&self) -> usize {
        self.registered
    }
}

/// Register all metrics with the global registry.
///
/// A second call fails with [`TelemetryError::MetricsInit`].
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(DOCTORS_REGISTERED.clone()),
        Box::new(APPOINTMENTS_BOOKED.clone()),
        Box::new(APPOINTMENT_TRANSITIONS.clone()),
        Box::new(REGISTRY_ERRORS.clone()),
    ];
    let registered = metrics.len();

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle { registered })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
