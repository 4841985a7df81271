//! # Algorithms
//!
//! Pure functions: identity keys, appointment ids, listing text.

pub mod appointment_id;
pub mod identity;
pub mod listing;

pub use appointment_id::{content_hash_id, random_id};
pub use identity::{identity_key, normalize_name, sha256_hex};
pub use listing::{render_listing, EMPTY_LISTING};
