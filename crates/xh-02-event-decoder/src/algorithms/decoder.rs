//! # Type-Directed Decoder
//!
//! Per field, given `(raw, descriptor)`:
//!
//! 1. no descriptor: generic rendering
//! 2. 16/32-bit: machine integer
//! 3. 64/128/256-bit: arbitrary-precision integer
//! 4. structured: recurse over named sub-fields by position
//! 5. anything else: generic rendering
//!
//! A value that does not fit its descriptor falls back to generic rendering;
//! decoding never fails.

use crate::domain::{DecodedEvent, DecodedValue, EventRecord, RawValue, TypeDescriptor};
use primitive_types::U256;
use tracing::trace;

/// Decode one field against its optional descriptor.
pub fn decode_field(raw: &RawValue, descriptor: Option<&TypeDescriptor>) -> DecodedValue {
    let Some(descriptor) = descriptor else {
        return DecodedValue::Human(raw.to_human());
    };

    match descriptor {
        d if d.is_machine_int() => match parse_u256(raw) {
            Some(n) if fits(n, d.bits().unwrap_or(32)) => DecodedValue::Int(n.low_u32()),
            _ => fallback(raw, descriptor),
        },
        d if d.is_big_int() => match parse_u256(raw) {
            Some(n) if fits(n, d.bits().unwrap_or(256)) => DecodedValue::BigInt(n),
            _ => fallback(raw, descriptor),
        },
        TypeDescriptor::Struct { sub } => match raw.named_fields() {
            Some(fields) => DecodedValue::Struct(
                fields
                    .iter()
                    .enumerate()
                    .map(|(i, (name, value))| {
                        let sub_descriptor = sub.get(i).and_then(Option::as_ref);
                        (name.clone(), decode_field(value, sub_descriptor))
                    })
                    .collect(),
            ),
            None => fallback(raw, descriptor),
        },
        _ => DecodedValue::Human(raw.to_human()),
    }
}

/// Decode one event record.
pub fn decode_event(record: &EventRecord) -> DecodedEvent {
    let event = &record.event;
    let data = event
        .data
        .iter()
        .enumerate()
        .map(|(i, raw)| decode_field(raw, event.type_defs.get(i).and_then(Option::as_ref)))
        .collect();

    DecodedEvent {
        section: event.section.clone(),
        method: event.method.clone(),
        index: event.index.clone(),
        data,
        phase: record.phase.clone(),
    }
}

/// Decode a batch in emission order. No reordering, no deduplication.
pub fn decode_events(records: &[EventRecord]) -> Vec<DecodedEvent> {
    records.iter().map(decode_event).collect()
}

fn fallback(raw: &RawValue, descriptor: &TypeDescriptor) -> DecodedValue {
    trace!(?descriptor, "Value does not match descriptor, rendering generically");
    DecodedValue::Human(raw.to_human())
}

fn fits(n: U256, bits: u32) -> bool {
    n.bits() <= bits as usize
}

/// Read an unsigned integer from a raw value.
///
/// Accepts native integers, decimal text (with `,` grouping) and `0x` hex.
fn parse_u256(raw: &RawValue) -> Option<U256> {
    match raw {
        RawValue::Uint(n) => Some(U256::from(*n)),
        RawValue::Int(n) if *n >= 0 => Some(U256::from(n.unsigned_abs())),
        RawValue::Text(text) => {
            let text = text.trim();
            if let Some(digits) = text.strip_prefix("0x") {
                U256::from_str_radix(digits, 16).ok()
            } else {
                let digits: String = text.chars().filter(|c| *c != ',').collect();
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                U256::from_dec_str(&digits).ok()
            }
        }
        _ => None,
    }
}
