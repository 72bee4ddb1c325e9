//! # Domain Module
//!
//! Core domain types for the Address Codec.

pub mod errors;
pub mod identity;
pub mod value_objects;

pub use errors::*;
pub use identity::CrossIdentity;
pub use value_objects::*;
