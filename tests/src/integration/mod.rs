//! # Integration Tests
//!
//! End-to-end flows through `HelperSession` against a scripted node.

pub mod fixtures;
pub mod flows;
