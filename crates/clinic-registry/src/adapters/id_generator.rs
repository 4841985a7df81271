//! Appointment Id Generator Adapters
//!
//! Implements the `AppointmentIdGenerator` port.

use crate::algorithms::{content_hash_id, random_id};
use crate::config::IdStrategy;
use crate::domain::AppointmentId;
use crate::ports::outbound::AppointmentIdGenerator;

/// SHA-256 content-hash ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentHashIdGenerator;

impl AppointmentIdGenerator for ContentHashIdGenerator {
    fn generate(&self, patient: &str, doctor: &str, time: &str) -> AppointmentId {
        content_hash_id(patient, doctor, time)
    }

    fn strategy(&self) -> IdStrategy {
        IdStrategy::ContentHash
    }
}

/// UUID v4 ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl AppointmentIdGenerator for RandomIdGenerator {
    fn generate(&self, _patient: &str, _doctor: &str, _time: &str) -> AppointmentId {
        random_id()
    }

    fn strategy(&self) -> IdStrategy {
        IdStrategy::Random
    }
}

/// Build the generator for a configured strategy.
pub fn id_generator_for(strategy: IdStrategy) -> Box<dyn AppointmentIdGenerator> {
    match strategy {
        IdStrategy::ContentHash => Box::new(ContentHashIdGenerator),
        IdStrategy::Random => Box::new(RandomIdGenerator),
    }
}
