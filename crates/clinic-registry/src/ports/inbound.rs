//! # Inbound Ports
//!
//! API trait defining what the Appointment Registry can do. This is the whole
//! surface the presentation layer is allowed to call.

use crate::domain::{AppointmentView, BookingReceipt, Receipt, RegistryError};

/// Appointment registry API - inbound port.
pub trait AppointmentRegistryApi {
    /// Register a doctor. Idempotent; always succeeds.
    fn add_doctor(&mut self, name: &str) -> Result<Receipt, RegistryError>;

    /// Unregister a doctor. Existing appointments are kept.
    fn remove_doctor(&mut self, name: &str) -> Result<Receipt, RegistryError>;

    /// Book an appointment in `Booked` state.
    fn book_appointment(
        &mut self,
        patient: &str,
        doctor: &str,
        time: &str,
    ) -> Result<BookingReceipt, RegistryError>;

    /// Booked -> Confirmed.
    fn confirm_appointment(&mut self, id: &str) -> Result<Receipt, RegistryError>;

    /// Booked -> Canceled.
    fn cancel_appointment(&mut self, id: &str) -> Result<Receipt, RegistryError>;

    /// All appointments in booking order.
    fn list_appointments(&self) -> Vec<AppointmentView>;
}
