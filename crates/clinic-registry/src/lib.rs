//! # Clinic Appointment Registry
//!
//! In-memory bookkeeping of doctors, patients and appointments.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Register and unregister doctors
//! - Book appointments, at most one per patient
//! - Move appointments from `Booked` to `Confirmed` or `Canceled`, once
//! - List appointments in booking order
//!
//! ## Invariants
//!
//! | Rule | Enforced by |
//! |------|-------------|
//! | Booking references a registered doctor | `invariant_doctor_registered` |
//! | One recorded appointment per patient | `invariant_single_booking` |
//! | Appointment ids never repeat | `invariant_unique_appointment_id` |
//! | `Booked` is the only non-terminal status | `AppointmentStatus::can_transition_to` |
//!
//! State lives in memory only and is gone when the owner drops the registry.
//!
//! ## Module Structure
//!
//! ```text
//! clinic-registry/
//! ├── domain/          # Appointment, AppointmentStatus, RegistryError, invariants
//! ├── algorithms/      # Identity keys, appointment ids, listing text
//! ├── ports/           # AppointmentRegistryApi, AppointmentIdGenerator
//! ├── adapters/        # Id generators, SharedRegistry (mutex-guarded)
//! ├── application/     # AppointmentRegistry service
//! └── ipc/             # Request/response payloads and handler
//! ```
//!
//! ## Example
//!
//! ```
//! use clinic_registry::{AppointmentRegistry, AppointmentRegistryApi, AppointmentStatus};
//!
//! let mut registry = AppointmentRegistry::new();
//! registry.add_doctor("A").unwrap();
//! let booked = registry.book_appointment("P1", "A", "2025-05-01 10:00").unwrap();
//! registry.confirm_appointment(booked.appointment_id.as_str()).unwrap();
//!
//! let listing = registry.list_appointments();
//! assert_eq!(listing.len(), 1);
//! assert_eq!(listing[0].status, AppointmentStatus::Confirmed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

// Re-exports
pub use adapters::{ContentHashIdGenerator, RandomIdGenerator, SharedRegistry};
pub use algorithms::{content_hash_id, identity_key, render_listing, EMPTY_LISTING};
pub use application::AppointmentRegistry;
pub use config::{ConfigError, IdStrategy, IdentityNormalization, RegistryConfig};
pub use domain::{
    Appointment, AppointmentId, AppointmentStatus, AppointmentView, BookingReceipt, ErrorKind,
    IdentityKey, Receipt, RegistryError,
};
pub use ipc::{RegistryHandler, RegistryRequest, RegistryResponse};
pub use ports::{AppointmentIdGenerator, AppointmentRegistryApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
