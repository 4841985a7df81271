//! Structured logging helpers.
//!
//! Every event carries a `subsystem` field so log lines from different
//! components can be filtered apart:
//! - `subsystem`: component name (clinic-registry, ...)
//! - `message`: log message
//! - additional context fields

/// Log an event with a `subsystem` field.
#[macro_export]
macro_rules! log_event {
    (info, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::warn!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (error, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::error!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::debug!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an appointment-related event with standard fields.
#[macro_export]
macro_rules! log_appointment_event {
    ($level:ident, $subsystem:expr, $msg:expr, $appointment_id:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            subsystem = $subsystem,
            appointment_id = %$appointment_id,
            $($($field)*,)?
            $msg
        )
    };
}
