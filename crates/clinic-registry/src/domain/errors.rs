//! # Domain Errors
//!
//! Error types for the Appointment Registry.
//!
//! Every variant is recoverable. An operation that returns one of these has
//! left the registry state untouched.

use super::value_objects::{AppointmentId, AppointmentStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Referenced doctor is not registered.
    #[error("Doctor {0} not found.")]
    DoctorNotFound(String),

    /// Patient already has a recorded appointment (any status).
    #[error("Patient {0} has already booked an appointment.")]
    DuplicateBooking(String),

    /// Referenced appointment id is unknown.
    #[error("Appointment {0} not found.")]
    AppointmentNotFound(AppointmentId),

    /// Confirm/cancel attempted on an appointment that already left `Booked`.
    #[error("Appointment {id} is already confirmed or canceled.")]
    InvalidTransition {
        /// Appointment id
        id: AppointmentId,
        /// Current status
        from: AppointmentStatus,
        /// Attempted status
        to: AppointmentStatus,
    },

    /// Generated id is already held by another appointment.
    #[error("Appointment id {0} is already in use.")]
    DuplicateAppointmentId(AppointmentId),
}

impl RegistryError {
    /// Machine-readable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DoctorNotFound(_) => ErrorKind::DoctorNotFound,
            Self::DuplicateBooking(_) => ErrorKind::DuplicateBooking,
            Self::AppointmentNotFound(_) => ErrorKind::AppointmentNotFound,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::DuplicateAppointmentId(_) => ErrorKind::DuplicateAppointmentId,
        }
    }
}

/// Flat error classification carried across the IPC boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`RegistryError::DoctorNotFound`].
    DoctorNotFound,
    /// See [`RegistryError::DuplicateBooking`].
    DuplicateBooking,
    /// See [`RegistryError::AppointmentNotFound`].
    AppointmentNotFound,
    /// See [`RegistryError::InvalidTransition`].
    InvalidTransition,
    /// See [`RegistryError::DuplicateAppointmentId`].
    DuplicateAppointmentId,
    /// A required request field was blank.
    MissingField,
}

impl ErrorKind {
    /// Label used for the `error_type` metric dimension.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::DoctorNotFound => "doctor_not_found",
            Self::DuplicateBooking => "duplicate_booking",
            Self::AppointmentNotFound => "appointment_not_found",
            Self::InvalidTransition => "invalid_transition",
            Self::DuplicateAppointmentId => "duplicate_appointment_id",
            Self::MissingField => "missing_field",
        }
    }
}
