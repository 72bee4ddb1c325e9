//! # Cross-Helper Test Suite
//!
//! Unified test crate for flows that cross component boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Codec + decoder + lifecycle end-to-end
//!     ├── fixtures.rs   # Scripted node, signers, event builders
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p xh-tests
//! cargo test -p xh-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
