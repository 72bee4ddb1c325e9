//! # Algorithms Module
//!
//! Pure classification and failure extraction.

pub mod classify;
pub mod failure;

pub use classify::{classify_status, EXTRINSIC_FAILED, EXTRINSIC_SUCCESS};
pub use failure::{extract_failure_detail, failure_for_update};
