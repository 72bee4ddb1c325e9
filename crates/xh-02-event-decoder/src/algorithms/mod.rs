//! # Algorithms Module
//!
//! Type-directed decoding of event fields.

pub mod decoder;

pub use decoder::{decode_event, decode_events, decode_field};
