//! # Domain Entities
//!
//! Core entities for the Appointment Registry.

use super::errors::RegistryError;
use super::value_objects::{AppointmentId, AppointmentStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A booked appointment.
///
/// Never deleted once recorded. Its status leaves `Booked` at most once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier.
    pub id: AppointmentId,
    /// Patient name as supplied at booking.
    pub patient: String,
    /// Doctor name as supplied at booking.
    pub doctor: String,
    /// Free-form appointment time.
    pub time: String,
    /// Current state.
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Create a new appointment in `Booked` state.
    pub fn new(
        id: AppointmentId,
        patient: impl Into<String>,
        doctor: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            patient: patient.into(),
            doctor: doctor.into(),
            time: time.into(),
            status: AppointmentStatus::Booked,
        }
    }

    /// Transition to new state.
    pub fn transition_to(&mut self, new_status: AppointmentStatus) -> Result<(), RegistryError> {
        if !self.status.can_transition_to(new_status) {
            return Err(RegistryError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to: new_status,
            });
        }
        self.status = new_status;
        Ok(())
    }

    /// Read-model snapshot of this appointment.
    pub fn view(&self) -> AppointmentView {
        AppointmentView {
            id: self.id.clone(),
            patient: self.patient.clone(),
            doctor: self.doctor.clone(),
            time: self.time.clone(),
            status: self.status,
        }
    }
}

/// Listing row handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentView {
    /// Appointment id.
    pub id: AppointmentId,
    /// Patient name.
    pub patient: String,
    /// Doctor name.
    pub doctor: String,
    /// Appointment time.
    pub time: String,
    /// Status at the moment of listing.
    pub status: AppointmentStatus,
}

impl fmt::Display for AppointmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Patient: {}, Doctor: {}, Time: {}, Status: {}",
            self.id, self.patient, self.doctor, self.time, self.status
        )
    }
}

/// Successful outcome of a state-changing operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Human-readable confirmation.
    pub message: String,
}

impl Receipt {
    /// Create a receipt.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful outcome of a booking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Id of the new appointment.
    pub appointment_id: AppointmentId,
    /// Human-readable confirmation.
    pub message: String,
}
