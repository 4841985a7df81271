//! Appointment id derivation.
//!
//! Fields are length-prefixed before hashing so that moving characters
//! between patient, doctor and time always changes the digest.

use crate::domain::AppointmentId;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Deterministic id: SHA-256 over the length-prefixed booking triple.
pub fn content_hash_id(patient: &str, doctor: &str, time: &str) -> AppointmentId {
    let mut hasher = Sha256::new();
    for field in [patient, doctor, time] {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    AppointmentId::new(hex::encode(hasher.finalize()))
}

/// Random id: UUID v4, hyphenated.
pub fn random_id() -> AppointmentId {
    AppointmentId::new(Uuid::new_v4().to_string())
}
