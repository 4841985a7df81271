//! # Clinic Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # End-to-end booking scenarios through the public API
//!     ├── properties.rs   # proptest properties over arbitrary names and times
//!     ├── concurrency.rs  # SharedRegistry under contention
//!     └── telemetry.rs    # Subscriber install + metrics exposition
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p clinic-tests
//!
//! # By category
//! cargo test -p clinic-tests integration::flows
//! cargo test -p clinic-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p clinic-tests
//! ```
