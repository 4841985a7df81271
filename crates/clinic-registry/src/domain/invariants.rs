//! # Domain Invariants
//!
//! Business rules checked before a booking is recorded. Each check is a pure
//! read; a failing check means nothing is written.

use super::errors::RegistryError;
use super::value_objects::{AppointmentId, IdentityKey};
use std::collections::{HashMap, HashSet};

/// Invariant: a booking references a registered doctor.
pub fn invariant_doctor_registered(
    doctors: &HashSet<IdentityKey>,
    key: &IdentityKey,
    doctor_name: &str,
) -> Result<(), RegistryError> {
    if !doctors.contains(key) {
        return Err(RegistryError::DoctorNotFound(doctor_name.to_string()));
    }
    Ok(())
}

/// Invariant: a patient holds at most one recorded appointment, whatever its
/// doctor, time or status.
pub fn invariant_single_booking(
    patients: &HashSet<IdentityKey>,
    key: &IdentityKey,
    patient_name: &str,
) -> Result<(), RegistryError> {
    if patients.contains(key) {
        return Err(RegistryError::DuplicateBooking(patient_name.to_string()));
    }
    Ok(())
}

/// Invariant: appointment ids are unique for the lifetime of the registry.
pub fn invariant_unique_appointment_id<V>(
    index: &HashMap<AppointmentId, V>,
    id: &AppointmentId,
) -> Result<(), RegistryError> {
    if index.contains_key(id) {
        return Err(RegistryError::DuplicateAppointmentId(id.clone()));
    }
    Ok(())
}
