//! # XH-02 Event Decoder
//!
//! Turns the raw events attached to a status update into decoded events
//! whose numeric fields are real integers.
//!
//! **Component ID:** 02
//! **Architecture:** Domain + pure algorithms
//!
//! ## Purpose
//!
//! - 16/32-bit fields become machine integers
//! - 64/128/256-bit fields become arbitrary-precision integers
//! - Structured fields are decoded per named sub-field
//! - Everything else keeps the node's generic rendering
//!
//! Decoding is total: a field that cannot be read as its descriptor says
//! falls back to the generic rendering instead of failing the batch.
//!
//! ## Module Structure
//!
//! ```text
//! xh-02-event-decoder/
//! ├── domain/          # RawValue, DecodedValue, TypeDescriptor, events
//! └── algorithms/      # decode_field, decode_event, decode_events
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::{decode_event, decode_events, decode_field};
pub use domain::{
    events_with_method, find_event, DecodedEvent, DecodedValue, EventIndex, EventRecord,
    RawEvent, RawValue, TypeDescriptor,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
