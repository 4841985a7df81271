//! # Outbound Ports
//!
//! Dependencies the registry needs from the outside world.

use crate::config::IdStrategy;
use crate::domain::AppointmentId;

/// Source of appointment ids.
///
/// Implementations must return ids that are unique for distinct booking
/// triples. Identical triples may share an id.
pub trait AppointmentIdGenerator: Send + Sync {
    /// Produce an id for a new booking.
    fn generate(&self, patient: &str, doctor: &str, time: &str) -> AppointmentId;

    /// Strategy this generator implements.
    fn strategy(&self) -> IdStrategy;
}
