//! IPC Module for the Appointment Registry
//!
//! The presentation layer talks to the registry only through
//! [`RegistryHandler`]. It performs no business logic of its own; blank-field
//! checks are the only validation applied here.

pub mod handler;
pub mod payloads;

pub use handler::{RegistryHandler, MISSING_DOCTOR_MESSAGE, MISSING_FIELDS_MESSAGE};
pub use payloads::*;
