//! # Event Records
//!
//! Raw event records as delivered with a status update, and the decoded
//! events built from them once per result.

use super::descriptor::TypeDescriptor;
use super::value::{DecodedValue, RawValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event index: `(pallet, event)` or whatever opaque shape the node used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventIndex {
    /// Pallet index and event index.
    Pair(u8, u8),
    /// Any other rendering.
    Opaque(Value),
}

/// One raw event with its type-descriptor row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Pallet name.
    pub section: String,
    /// Event name.
    pub method: String,
    /// Event index.
    pub index: EventIndex,
    /// Positional field values.
    pub data: Vec<RawValue>,
    /// Positional descriptors; missing entries decode generically.
    #[serde(default)]
    pub type_defs: Vec<Option<TypeDescriptor>>,
}

impl RawEvent {
    /// Event with no descriptors (every field renders generically).
    pub fn new(
        section: impl Into<String>,
        method: impl Into<String>,
        index: EventIndex,
        data: Vec<RawValue>,
    ) -> Self {
        Self {
            section: section.into(),
            method: method.into(),
            index,
            data,
            type_defs: Vec::new(),
        }
    }

    /// Attach the descriptor row.
    pub fn with_type_defs(mut self, type_defs: Vec<Option<TypeDescriptor>>) -> Self {
        self.type_defs = type_defs;
        self
    }
}

/// Raw event plus the phase it was emitted in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The event.
    pub event: RawEvent,
    /// Emission phase (opaque).
    pub phase: Value,
}

impl EventRecord {
    /// Record emitted while applying extrinsic `index`.
    pub fn apply_extrinsic(index: u32, event: RawEvent) -> Self {
        Self {
            event,
            phase: serde_json::json!({ "ApplyExtrinsic": index }),
        }
    }
}

/// Decoded event. Owned by the result that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedEvent {
    /// Pallet name.
    pub section: String,
    /// Event name.
    pub method: String,
    /// Event index.
    pub index: EventIndex,
    /// Decoded positional fields.
    pub data: Vec<DecodedValue>,
    /// Emission phase (opaque).
    pub phase: Value,
}

impl DecodedEvent {
    /// `section.method` match.
    pub fn is(&self, section: &str, method: &str) -> bool {
        self.section == section && self.method == method
    }

    /// Positional field.
    pub fn field(&self, index: usize) -> Option<&DecodedValue> {
        self.data.get(index)
    }

    /// `section.method` label.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section, self.method)
    }
}

/// First event matching `section.method`.
pub fn find_event<'a>(
    events: &'a [DecodedEvent],
    section: &str,
    method: &str,
) -> Option<&'a DecodedEvent> {
    events.iter().find(|e| e.is(section, method))
}

/// All events with `method`, in emission order.
pub fn events_with_method<'a>(
    events: &'a [DecodedEvent],
    method: &'a str,
) -> impl Iterator<Item = &'a DecodedEvent> + 'a {
    events.iter().filter(move |e| e.method == method)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(section: &str, method: &str) -> DecodedEvent {
        DecodedEvent {
            section: section.to_string(),
            method: method.to_string(),
            index: EventIndex::Pair(0, 0),
            data: vec![],
            phase: Value::Null,
        }
    }

    #[test]
    fn test_find_event() {
        let events = vec![
            decoded("system", "NewAccount"),
            decoded("common", "Transfer"),
            decoded("system", "ExtrinsicSuccess"),
        ];
        assert!(find_event(&events, "common", "Transfer").is_some());
        assert!(find_event(&events, "common", "Approved").is_none());
        assert_eq!(events_with_method(&events, "ExtrinsicSuccess").count(), 1);
    }

    #[test]
    fn test_event_index_untagged() {
        let pair: EventIndex = serde_json::from_str("[66, 2]").unwrap();
        assert_eq!(pair, EventIndex::Pair(66, 2));

        let opaque: EventIndex = serde_json::from_str("\"0x4202\"").unwrap();
        assert_eq!(opaque, EventIndex::Opaque(Value::String("0x4202".to_string())));
    }

    #[test]
    fn test_apply_extrinsic_phase() {
        let record = EventRecord::apply_extrinsic(
            2,
            RawEvent::new("system", "ExtrinsicSuccess", EventIndex::Pair(0, 0), vec![]),
        );
        assert_eq!(record.phase, serde_json::json!({ "ApplyExtrinsic": 2 }));
    }
}
