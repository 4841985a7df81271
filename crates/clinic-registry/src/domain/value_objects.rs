//! # Domain Value Objects
//!
//! Immutable value types for the Appointment Registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique appointment identifier.
///
/// Either a 64-char SHA-256 hex digest or a UUID v4 string, depending on the
/// configured [`IdStrategy`](crate::config::IdStrategy).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppointmentId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for AppointmentId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Key under which a doctor or patient is tracked in the presence sets.
///
/// Built by [`crate::algorithms::identity_key`]; two names refer to the same
/// person iff their keys are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Wrap an already-normalized key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Appointment state machine.
///
/// `Booked` is the only non-terminal state:
///
/// ```text
/// Booked ──confirm──→ Confirmed
///    └────cancel───→ Canceled
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Created, awaiting confirmation or cancellation.
    #[default]
    Booked,
    /// Confirmed by the doctor.
    Confirmed,
    /// Canceled.
    Canceled,
}

impl AppointmentStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Booked, Self::Confirmed) | (Self::Booked, Self::Canceled)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Canceled)
    }

    /// Metric label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Booked => "Booked",
            Self::Confirmed => "Confirmed",
            Self::Canceled => "Canceled",
        };
        f.write_str(s)
    }
}
