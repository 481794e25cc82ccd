//! Edit-log operation records and their JSON decoding.
//!
//! # Record format
//!
//! Each operation is a JSON object carrying a discriminant key plus the
//! fields for that kind, and nothing else:
//!
//! - `{ "op": "skip",   "count": n }` — move the cursor by `n` characters
//! - `{ "op": "delete", "count": n }` — delete `n` characters at the cursor
//! - `{ "op": "insert", "chars": s }` — insert `s` at the cursor
//!
//! The key names default to `op` / `count` / `chars` for compatibility with
//! existing log producers and can be renamed per deployment via [`OpKeys`].

use serde_json::Value;
use thiserror::Error;

/// A single decoded edit operation.
///
/// Adding a new operation kind means adding a variant here and a match arm
/// in [`decode_op`] and [`crate::state::DocumentState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Move the cursor by `count` characters. Negative counts move backward.
    Skip { count: i64 },
    /// Delete `count` characters starting at the cursor.
    Delete { count: i64 },
    /// Insert `chars` at the cursor.
    Insert { chars: String },
}

impl Op {
    /// Wire name of this operation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Op::Skip { .. } => "skip",
            Op::Delete { .. } => "delete",
            Op::Insert { .. } => "insert",
        }
    }
}

/// Key names used when decoding operation records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpKeys {
    /// Discriminant key naming the operation kind.
    pub kind: String,
    /// Count field for `skip` and `delete`.
    pub count: String,
    /// Text field for `insert`.
    pub chars: String,
}

impl Default for OpKeys {
    fn default() -> Self {
        Self {
            kind: "op".to_string(),
            count: "count".to_string(),
            chars: "chars".to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpDecodeError {
    #[error("invalid operation list payload: {0}")]
    InvalidPayload(String),
    #[error("operation record must be a JSON object")]
    InvalidRecord,
    #[error("{key:?} key is required for all operations")]
    MissingKind { key: String },
    #[error("unknown op: {kind:?}")]
    UnknownOperation { kind: String },
    #[error("{field:?} value is required for the {kind:?} op")]
    MissingField { kind: String, field: String },
    #[error("unexpected {field:?} key for the {kind:?} op")]
    UnexpectedField { kind: String, field: String },
    #[error("{field:?} value for the {kind:?} op must be {expected}")]
    InvalidField {
        kind: String,
        field: String,
        expected: &'static str,
    },
}

/// Decodes a single operation record.
///
/// The record's key set must match the kind's required set exactly; extra
/// keys are rejected rather than ignored.
pub fn decode_op(record: &Value, keys: &OpKeys) -> Result<Op, OpDecodeError> {
    let obj = record.as_object().ok_or(OpDecodeError::InvalidRecord)?;
    let kind = obj
        .get(&keys.kind)
        .and_then(Value::as_str)
        .ok_or_else(|| OpDecodeError::MissingKind {
            key: keys.kind.clone(),
        })?;

    let value_key = match kind {
        "skip" | "delete" => &keys.count,
        "insert" => &keys.chars,
        other => {
            return Err(OpDecodeError::UnknownOperation {
                kind: other.to_string(),
            })
        }
    };

    for key in obj.keys() {
        if key != &keys.kind && key != value_key {
            return Err(OpDecodeError::UnexpectedField {
                kind: kind.to_string(),
                field: key.clone(),
            });
        }
    }
    let value = obj.get(value_key).ok_or_else(|| OpDecodeError::MissingField {
        kind: kind.to_string(),
        field: value_key.clone(),
    })?;

    match kind {
        "skip" | "delete" => {
            let count = value.as_i64().ok_or_else(|| OpDecodeError::InvalidField {
                kind: kind.to_string(),
                field: keys.count.clone(),
                expected: "an integer",
            })?;
            Ok(if kind == "skip" {
                Op::Skip { count }
            } else {
                Op::Delete { count }
            })
        }
        "insert" => {
            let chars = value.as_str().ok_or_else(|| OpDecodeError::InvalidField {
                kind: kind.to_string(),
                field: keys.chars.clone(),
                expected: "a string",
            })?;
            Ok(Op::Insert {
                chars: chars.to_string(),
            })
        }
        _ => unreachable!("kind checked above"),
    }
}

/// Decodes an ordered list of operation records, failing on the first
/// malformed record with no partial output.
pub fn decode_ops(records: &[Value], keys: &OpKeys) -> Result<Vec<Op>, OpDecodeError> {
    records.iter().map(|r| decode_op(r, keys)).collect()
}

/// Decodes an edit log serialized as a JSON array string.
pub fn decode_ops_json(json: &str, keys: &OpKeys) -> Result<Vec<Op>, OpDecodeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| OpDecodeError::InvalidPayload(e.to_string()))?;
    let records = value
        .as_array()
        .ok_or_else(|| OpDecodeError::InvalidPayload("expected a JSON array".to_string()))?;
    decode_ops(records, keys)
}
