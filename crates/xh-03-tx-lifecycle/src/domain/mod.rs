//! # Domain Module
//!
//! Core domain types for the Transaction Lifecycle.

pub mod call;
pub mod config;
pub mod errors;
pub mod metadata;
pub mod result;
pub mod status;

pub use call::*;
pub use config::{HelperConfig, DEFAULT_STATUS_CAPACITY};
pub use errors::HelperError;
pub use metadata::*;
pub use result::*;
pub use status::*;
