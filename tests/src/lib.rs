//! # Plasma Integration Test Suite
//!
//! Black-box scenarios exercised against the public `plasma` crate
//! surface, covering block construction, inclusion/non-inclusion
//! verification, and tamper resistance.
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # Concrete fixtures from block-construction walkthroughs
//!     └── properties.rs  # Quantified invariants checked across varied blocks
//! ```

#![allow(dead_code)]

pub mod integration;
