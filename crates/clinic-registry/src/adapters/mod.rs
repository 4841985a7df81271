//! # Adapters
//!
//! Port implementations: id generators and the lock-guarded shared registry.

pub mod id_generator;
pub mod shared_registry;

pub use id_generator::{id_generator_for, ContentHashIdGenerator, RandomIdGenerator};
pub use shared_registry::SharedRegistry;
