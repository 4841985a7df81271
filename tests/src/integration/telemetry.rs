//! # Telemetry Wiring
//!
//! Subscriber install and metric exposition as seen from the registry.
//! Metrics are process-global and other tests run in parallel, so counter
//! checks compare lower bounds rather than exact values. The doctor gauge has
//! an exact check in its own binary, `tests/doctor_gauge.rs`.

#[cfg(test)]
mod tests {
    use clinic_registry::{AppointmentRegistry, AppointmentRegistryApi};
    use clinic_telemetry::metrics::{
        APPOINTMENTS_BOOKED, APPOINTMENT_TRANSITIONS, REGISTRY_ERRORS,
    };
    use clinic_telemetry::{encode_metrics, init_telemetry, TelemetryConfig, TelemetryGuard};
    use std::sync::OnceLock;

    static TELEMETRY: OnceLock<Result<TelemetryGuard, String>> = OnceLock::new();

    fn telemetry() -> &'static Result<TelemetryGuard, String> {
        TELEMETRY.get_or_init(|| {
            let config = TelemetryConfig::from_lookup(|key| match key {
                "CLINIC_LOG_LEVEL" => Some("clinic_registry=debug,warn".to_string()),
                "CLINIC_CONSOLE_OUTPUT" => Some("false".to_string()),
                _ => None,
            });
            init_telemetry(config).map_err(|e| e.to_string())
        })
    }

    #[test]
    fn test_init_telemetry_once() {
        let guard = telemetry().as_ref().unwrap();
        assert_eq!(guard.service_name(), "clinic-registry");
        assert_eq!(guard.metrics_registered(), 4);
        // The global subscriber is already installed now.
        assert!(clinic_telemetry::init_tracing(&TelemetryConfig::default()).is_err());
    }

    #[test]
    fn test_registry_operations_reach_metrics() {
        assert!(telemetry().is_ok());

        let booked_before = APPOINTMENTS_BOOKED.get();
        let confirmed_before = APPOINTMENT_TRANSITIONS
            .with_label_values(&["confirmed"])
            .get();
        let duplicates_before = REGISTRY_ERRORS
            .with_label_values(&["duplicate_booking"])
            .get();

        let mut registry = AppointmentRegistry::new();
        registry.add_doctor("Metrics").unwrap();
        let id = registry
            .book_appointment("metrics-patient", "Metrics", "12:00")
            .unwrap()
            .appointment_id;
        registry.confirm_appointment(id.as_str()).unwrap();
        let _ = registry.book_appointment("metrics-patient", "Metrics", "13:00");

        assert!(APPOINTMENTS_BOOKED.get() > booked_before);
        assert!(
            APPOINTMENT_TRANSITIONS
                .with_label_values(&["confirmed"])
                .get()
                > confirmed_before
        );
        assert!(
            REGISTRY_ERRORS
                .with_label_values(&["duplicate_booking"])
                .get()
                > duplicates_before
        );

        let text = encode_metrics().unwrap();
        assert!(text.contains("clinic_appointments_booked_total"));
        assert!(text.contains("clinic_appointment_transitions_total"));
        assert!(text.contains("clinic_registry_errors_total"));
        assert!(text.contains("clinic_doctors_registered"));
    }

    #[test]
    fn test_config_from_lookup() {
        let config = TelemetryConfig::from_lookup(|key| match key {
            "CLINIC_SERVICE_NAME" => Some("front-desk".to_string()),
            "CLINIC_JSON_LOGS" => Some("1".to_string()),
            "CLINIC_ENVIRONMENT" => Some("staging".to_string()),
            _ => None,
        });
        assert_eq!(config.service_name, "front-desk");
        assert!(config.json_logs);
        assert_eq!(config.environment, "staging");
        assert_eq!(config.log_level, "info");
    }
}
