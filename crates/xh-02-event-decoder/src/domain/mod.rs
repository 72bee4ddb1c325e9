//! # Domain Module
//!
//! Raw and decoded event types for the Event Decoder.

pub mod descriptor;
pub mod event;
pub mod value;

pub use descriptor::TypeDescriptor;
pub use event::*;
pub use value::{DecodedValue, RawValue};
