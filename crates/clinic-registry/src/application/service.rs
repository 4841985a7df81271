//! Appointment Registry Service
//!
//! Main service implementing `AppointmentRegistryApi`.
//!
//! Owns the three collections exclusively. Operations run to completion
//! synchronously; every rejected operation leaves all three untouched.

use crate::adapters::id_generator::id_generator_for;
use crate::algorithms::{identity_key, render_listing};
use crate::config::RegistryConfig;
use crate::domain::{
    invariant_doctor_registered, invariant_single_booking, invariant_unique_appointment_id,
    Appointment, AppointmentId, AppointmentStatus, AppointmentView, BookingReceipt, IdentityKey,
    Receipt, RegistryError,
};
use crate::ports::inbound::AppointmentRegistryApi;
use crate::ports::outbound::AppointmentIdGenerator;
use clinic_telemetry::metrics::{
    APPOINTMENTS_BOOKED, APPOINTMENT_TRANSITIONS, DOCTORS_REGISTERED, REGISTRY_ERRORS,
};
use clinic_telemetry::log_appointment_event;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

const SUBSYSTEM: &str = "clinic-registry";

/// In-memory appointment registry.
///
/// Appointments are kept in booking order; `index` maps each id to its slot.
pub struct AppointmentRegistry {
    config: RegistryConfig,
    id_generator: Box<dyn AppointmentIdGenerator>,
    doctors: HashSet<IdentityKey>,
    patients: HashSet<IdentityKey>,
    appointments: Vec<Appointment>,
    index: HashMap<AppointmentId, usize>,
}

impl AppointmentRegistry {
    /// Create an empty registry with default config
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with custom config
    pub fn with_config(config: RegistryConfig) -> Self {
        let id_generator = id_generator_for(config.id_strategy);
        Self::with_id_generator(config, id_generator)
    }

    /// Create an empty registry with an explicit id generator.
    ///
    /// `config.id_strategy` is ignored in favour of `id_generator`.
    pub fn with_id_generator(
        config: RegistryConfig,
        id_generator: Box<dyn AppointmentIdGenerator>,
    ) -> Self {
        debug!(
            id_strategy = ?id_generator.strategy(),
            normalization = ?config.identity_normalization,
            hash_doctor_identities = config.hash_doctor_identities,
            "[clinic] Registry created"
        );
        Self {
            config,
            id_generator,
            doctors: HashSet::new(),
            patients: HashSet::new(),
            appointments: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn doctor_key(&self, name: &str) -> IdentityKey {
        identity_key(
            name,
            self.config.identity_normalization,
            self.config.hash_doctor_identities,
        )
    }

    fn patient_key(&self, name: &str) -> IdentityKey {
        identity_key(name, self.config.identity_normalization, false)
    }

    /// Is `name` a registered doctor?
    pub fn has_doctor(&self, name: &str) -> bool {
        self.doctors.contains(&self.doctor_key(name))
    }

    /// Has `name` booked an appointment?
    pub fn has_patient(&self, name: &str) -> bool {
        self.patients.contains(&self.patient_key(name))
    }

    /// Number of registered doctors.
    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    /// Number of patients holding a booking.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Number of recorded appointments, all statuses.
    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// Look up an appointment by id.
    pub fn get_appointment(&self, id: &str) -> Option<&Appointment> {
        self.index
            .get(&AppointmentId::from(id))
            .map(|&slot| &self.appointments[slot])
    }

    /// Lazy listing in booking order.
    pub fn appointments(&self) -> impl Iterator<Item = AppointmentView> + '_ {
        self.appointments.iter().map(Appointment::view)
    }

    /// Listing as text, or `No appointments found.` when empty.
    pub fn render_listing(&self) -> String {
        let views: Vec<AppointmentView> = self.appointments().collect();
        render_listing(&views)
    }

    fn reject(&self, operation: &'static str, err: RegistryError) -> RegistryError {
        warn!(operation, error = %err, "[clinic] Operation rejected");
        REGISTRY_ERRORS
            .with_label_values(&[err.kind().as_label()])
            .inc();
        err
    }

    fn transition(
        &mut self,
        operation: &'static str,
        id: &str,
        target: AppointmentStatus,
    ) -> Result<Receipt, RegistryError> {
        let id = AppointmentId::from(id);
        let slot = match self.index.get(&id) {
            Some(&slot) => slot,
            None => {
                return Err(self.reject(operation, RegistryError::AppointmentNotFound(id)));
            }
        };

        if let Err(err) = self.appointments[slot].transition_to(target) {
            return Err(self.reject(operation, err));
        }

        APPOINTMENT_TRANSITIONS
            .with_label_values(&[target.as_label()])
            .inc();
        log_appointment_event!(
            info,
            SUBSYSTEM,
            "Appointment status changed",
            id,
            status = %target
        );

        let verb = match target {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::Booked => "booked",
        };
        Ok(Receipt::new(format!("Appointment {} {}.", id, verb)))
    }
}

impl Default for AppointmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AppointmentRegistry {
    fn drop(&mut self) {
        // The gauge sums every live registry.
        DOCTORS_REGISTERED.sub(self.doctors.len() as i64);
    }
}

impl AppointmentRegistryApi for AppointmentRegistry {
    fn add_doctor(&mut self, name: &str) -> Result<Receipt, RegistryError> {
        let key = self.doctor_key(name);
        if self.doctors.insert(key) {
            DOCTORS_REGISTERED.inc();
            info!(doctor = name, "[clinic] Doctor registered");
        } else {
            debug!(doctor = name, "[clinic] Doctor already registered");
        }
        Ok(Receipt::new(format!("Doctor {} added.", name)))
    }

    fn remove_doctor(&mut self, name: &str) -> Result<Receipt, RegistryError> {
        let key = self.doctor_key(name);
        if !self.doctors.remove(&key) {
            return Err(self.reject(
                "remove_doctor",
                RegistryError::DoctorNotFound(name.to_string()),
            ));
        }
        DOCTORS_REGISTERED.dec();

        info!(doctor = name, "[clinic] Doctor removed");
        Ok(Receipt::new(format!("Doctor {} removed.", name)))
    }

    fn book_appointment(
        &mut self,
        patient: &str,
        doctor: &str,
        time: &str,
    ) -> Result<BookingReceipt, RegistryError> {
        // 1. Doctor must be registered
        let doctor_key = self.doctor_key(doctor);
        if let Err(err) = invariant_doctor_registered(&self.doctors, &doctor_key, doctor) {
            return Err(self.reject("book_appointment", err));
        }

        // 2. One booking per patient
        let patient_key = self.patient_key(patient);
        if let Err(err) = invariant_single_booking(&self.patients, &patient_key, patient) {
            return Err(self.reject("book_appointment", err));
        }

        // 3. Fresh id
        let id = self.id_generator.generate(patient, doctor, time);
        if let Err(err) = invariant_unique_appointment_id(&self.index, &id) {
            return Err(self.reject("book_appointment", err));
        }

        // 4. Record
        self.index.insert(id.clone(), self.appointments.len());
        self.appointments
            .push(Appointment::new(id.clone(), patient, doctor, time));
        self.patients.insert(patient_key);
        APPOINTMENTS_BOOKED.inc();

        log_appointment_event!(
            info,
            SUBSYSTEM,
            "Appointment booked",
            id,
            patient = patient,
            doctor = doctor,
            time = time
        );

        let message = format!(
            "Appointment booked: {} for {} with Dr. {} at {}.",
            id, patient, doctor, time
        );
        Ok(BookingReceipt {
            appointment_id: id,
            message,
        })
    }

    fn confirm_appointment(&mut self, id: &str) -> Result<Receipt, RegistryError> {
        self.transition("confirm_appointment", id, AppointmentStatus::Confirmed)
    }

    fn cancel_appointment(&mut self, id: &str) -> Result<Receipt, RegistryError> {
        self.transition("cancel_appointment", id, AppointmentStatus::Canceled)
    }

    fn list_appointments(&self) -> Vec<AppointmentView> {
        debug!(count = self.appointments.len(), "[clinic] Listing appointments");
        self.appointments().collect()
    }
}
