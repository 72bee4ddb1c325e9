//! # Raw and Decoded Values
//!
//! `RawValue` is what the node hands over for one event field. `DecodedValue`
//! is what the decoder produces from it.

use primitive_types::U256;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Opaque field value as emitted by the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawValue {
    /// No data.
    Unit,
    /// Boolean.
    Bool(bool),
    /// Unsigned integer up to 128 bits.
    Uint(u128),
    /// Signed integer.
    Int(i128),
    /// Text (may carry a decimal or `0x` hex number).
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Ordered sequence.
    Seq(Vec<RawValue>),
    /// Ordered named fields.
    Composite(Vec<(String, RawValue)>),
    /// Enum variant with its payload.
    Variant {
        /// Variant name.
        name: String,
        /// Variant payload (`Unit` for none).
        value: Box<RawValue>,
    },
}

impl RawValue {
    /// Named sub-fields in declaration order, if this value has them.
    pub fn named_fields(&self) -> Option<&[(String, RawValue)]> {
        match self {
            Self::Composite(fields) => Some(fields),
            _ => None,
        }
    }

    /// Generic human-readable rendering. Never fails.
    pub fn to_human(&self) -> Value {
        match self {
            Self::Unit => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Uint(n) => Value::String(group_thousands(&n.to_string())),
            Self::Int(n) => {
                let digits = group_thousands(&n.unsigned_abs().to_string());
                if *n < 0 {
                    Value::String(format!("-{digits}"))
                } else {
                    Value::String(digits)
                }
            }
            Self::Text(s) => Value::String(s.clone()),
            Self::Bytes(bytes) => Value::String(format!("0x{}", hex::encode(bytes))),
            Self::Seq(items) => Value::Array(items.iter().map(Self::to_human).collect()),
            Self::Composite(fields) => {
                let mut map = Map::new();
                for (name, value) in fields {
                    map.insert(name.clone(), value.to_human());
                }
                Value::Object(map)
            }
            Self::Variant { name, value } => match value.as_ref() {
                Self::Unit => Value::String(name.clone()),
                inner => {
                    let mut map = Map::new();
                    map.insert(name.clone(), inner.to_human());
                    Value::Object(map)
                }
            },
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Decoded field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedValue {
    /// 16/32-bit integer.
    Int(u32),
    /// 64/128/256-bit integer.
    BigInt(U256),
    /// Named sub-fields in declaration order.
    Struct(Vec<(String, DecodedValue)>),
    /// Generic human-readable rendering.
    Human(Value),
}

impl DecodedValue {
    /// Machine integer, if decoded as one.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Big integer, widening machine integers.
    pub fn as_u256(&self) -> Option<U256> {
        match self {
            Self::BigInt(n) => Some(*n),
            Self::Int(n) => Some(U256::from(*n)),
            _ => None,
        }
    }

    /// Named sub-field of a structured value.
    pub fn get(&self, name: &str) -> Option<&DecodedValue> {
        match self {
            Self::Struct(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Generic rendering, if the value fell back to it.
    pub fn as_human(&self) -> Option<&Value> {
        match self {
            Self::Human(value) => Some(value),
            _ => None,
        }
    }

    /// JSON form used for logging. Big integers become decimal strings.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Int(n) => Value::from(*n),
            Self::BigInt(n) => Value::String(n.to_string()),
            Self::Struct(fields) => {
                let mut map = Map::new();
                for (name, value) in fields {
                    map.insert(name.clone(), value.to_json());
                }
                Value::Object(map)
            }
            Self::Human(value) => value.clone(),
        }
    }
}

impl Serialize for DecodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
