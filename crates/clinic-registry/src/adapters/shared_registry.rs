//! Shared Registry Adapter
//!
//! Cloneable, thread-safe handle around one `AppointmentRegistry`.
//!
//! A single mutex guards every operation, reads included. Booking checks
//! "does this patient already have an appointment" and then inserts; both
//! steps must happen under the same lock or two callers could each pass the
//! check.

use crate::application::service::AppointmentRegistry;
use crate::config::RegistryConfig;
use crate::domain::{Appointment, AppointmentView, BookingReceipt, Receipt, RegistryError};
use crate::ports::inbound::AppointmentRegistryApi;
use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe registry handle.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<AppointmentRegistry>>,
}

impl SharedRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: AppointmentRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Create an empty shared registry with custom config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::new(AppointmentRegistry::with_config(config))
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&mut AppointmentRegistry) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Snapshot of one appointment.
    pub fn get_appointment(&self, id: &str) -> Option<Appointment> {
        self.inner.lock().get_appointment(id).cloned()
    }

    /// Number of recorded appointments.
    pub fn appointment_count(&self) -> usize {
        self.inner.lock().appointment_count()
    }

    /// Listing as text.
    pub fn render_listing(&self) -> String {
        self.inner.lock().render_listing()
    }

    /// Register a doctor. See [`AppointmentRegistryApi::add_doctor`].
    pub fn add_doctor(&self, name: &str) -> Result<Receipt, RegistryError> {
        self.inner.lock().add_doctor(name)
    }

    /// Unregister a doctor.
    pub fn remove_doctor(&self, name: &str) -> Result<Receipt, RegistryError> {
        self.inner.lock().remove_doctor(name)
    }

    /// Book under the lock, so the duplicate check and the insert cannot
    /// interleave with another caller.
    pub fn book_appointment(
        &self,
        patient: &str,
        doctor: &str,
        time: &str,
    ) -> Result<BookingReceipt, RegistryError> {
        self.inner.lock().book_appointment(patient, doctor, time)
    }

    /// Booked -> Confirmed.
    pub fn confirm_appointment(&self, id: &str) -> Result<Receipt, RegistryError> {
        self.inner.lock().confirm_appointment(id)
    }

    /// Booked -> Canceled.
    pub fn cancel_appointment(&self, id: &str) -> Result<Receipt, RegistryError> {
        self.inner.lock().cancel_appointment(id)
    }

    /// Materialized listing in booking order.
    pub fn list_appointments(&self) -> Vec<AppointmentView> {
        self.inner.lock().list_appointments()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(AppointmentRegistry::new())
    }
}

impl AppointmentRegistryApi for SharedRegistry {
    fn add_doctor(&mut self, name: &str) -> Result<Receipt, RegistryError> {
        SharedRegistry::add_doctor(self, name)
    }

    fn remove_doctor(&mut self, name: &str) -> Result<Receipt, RegistryError> {
        SharedRegistry::remove_doctor(self, name)
    }

    fn book_appointment(
        &mut self,
        patient: &str,
        doctor: &str,
        time: &str,
    ) -> Result<BookingReceipt, RegistryError> {
        SharedRegistry::book_appointment(self, patient, doctor, time)
    }

    fn confirm_appointment(&mut self, id: &str) -> Result<Receipt, RegistryError> {
        SharedRegistry::confirm_appointment(self, id)
    }

    fn cancel_appointment(&mut self, id: &str) -> Result<Receipt, RegistryError> {
        SharedRegistry::cancel_appointment(self, id)
    }

    fn list_appointments(&self) -> Vec<AppointmentView> {
        SharedRegistry::list_appointments(self)
    }
}
