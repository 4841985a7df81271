//! IPC Payloads for the Appointment Registry
//!
//! Request/response envelopes exchanged with the presentation layer.

use crate::domain::{AppointmentId, AppointmentView, ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operation requested by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RegistryRequest {
    /// Register a doctor.
    AddDoctor {
        /// Doctor name
        name: String,
    },
    /// Unregister a doctor.
    RemoveDoctor {
        /// Doctor name
        name: String,
    },
    /// Book an appointment.
    BookAppointment {
        /// Patient name
        patient: String,
        /// Doctor name
        doctor: String,
        /// Free-form time
        time: String,
    },
    /// Confirm a booked appointment.
    ConfirmAppointment {
        /// Appointment id
        id: String,
    },
    /// Cancel a booked appointment.
    CancelAppointment {
        /// Appointment id
        id: String,
    },
    /// List all appointments.
    ListAppointments,
}

impl RegistryRequest {
    /// Operation name, for logs.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::AddDoctor { .. } => "add_doctor",
            Self::RemoveDoctor { .. } => "remove_doctor",
            Self::BookAppointment { .. } => "book_appointment",
            Self::ConfirmAppointment { .. } => "confirm_appointment",
            Self::CancelAppointment { .. } => "cancel_appointment",
            Self::ListAppointments => "list_appointments",
        }
    }

    /// Required fields that are empty or whitespace-only.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let fields: Vec<(&'static str, &str)> = match self {
            Self::AddDoctor { name } | Self::RemoveDoctor { name } => {
                vec![("name", name.as_str())]
            }
            Self::BookAppointment {
                patient,
                doctor,
                time,
            } => vec![
                ("patient", patient.as_str()),
                ("doctor", doctor.as_str()),
                ("time", time.as_str()),
            ],
            Self::ConfirmAppointment { id } | Self::CancelAppointment { id } => {
                vec![("id", id.as_str())]
            }
            Self::ListAppointments => vec![],
        };
        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}

/// Result of one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryResponse {
    /// Per-request correlation id
    pub correlation_id: Uuid,
    /// Whether the operation succeeded
    pub success: bool,
    /// Confirmation, listing text, or error text
    pub message: String,
    /// Id of a newly booked appointment
    pub appointment_id: Option<AppointmentId>,
    /// Listing rows (only for `ListAppointments`)
    pub appointments: Vec<AppointmentView>,
    /// Error classification when `success` is false
    pub error_kind: Option<ErrorKind>,
}

impl RegistryResponse {
    /// Successful response carrying only a message.
    pub fn ok(correlation_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            correlation_id,
            success: true,
            message: message.into(),
            appointment_id: None,
            appointments: Vec::new(),
            error_kind: None,
        }
    }

    /// Failed response.
    pub fn error(correlation_id: Uuid, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            correlation_id,
            success: false,
            message: message.into(),
            appointment_id: None,
            appointments: Vec::new(),
            error_kind: Some(kind),
        }
    }
}
