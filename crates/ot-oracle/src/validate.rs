//! Validation entry points: decode an edit log, replay it against the
//! stale text, and compare the outcome to the latest text.

use serde_json::Value;
use thiserror::Error;

use crate::op::{decode_ops, decode_ops_json, Op, OpDecodeError, OpKeys};
use crate::state::{DocumentState, StateError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error(transparent)]
    Decode(#[from] OpDecodeError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("stale text after applying operations does not match the latest text: got {actual:?}, want {expected:?}")]
    TextMismatch { actual: String, expected: String },
}

/// Outcome of one validation pass.
///
/// `reason` is empty when `ok` is true, otherwise it renders the first
/// failure encountered. Failures never aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub reason: String,
}

impl From<Result<(), ValidateError>> for ValidationResult {
    fn from(result: Result<(), ValidateError>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                reason: String::new(),
            },
            Err(err) => Self {
                ok: false,
                reason: err.to_string(),
            },
        }
    }
}

/// Replays `ops` over `stale` from `initial_cursor` and checks that the
/// result equals `latest`. Fails fast on the first violated invariant.
///
/// An invalid log is a normal outcome here, reported through the error
/// value; nothing in this path panics on well-formed input.
pub fn try_validate(
    stale: &str,
    latest: &str,
    ops: &[Op],
    initial_cursor: usize,
) -> Result<(), ValidateError> {
    let mut state = DocumentState::new(stale, initial_cursor)?;
    for op in ops {
        state.apply(op)?;
    }
    let actual = state.text();
    if actual != latest {
        return Err(ValidateError::TextMismatch {
            actual,
            expected: latest.to_string(),
        });
    }
    Ok(())
}

/// [`try_validate`] with the outcome folded into a [`ValidationResult`].
pub fn validate(stale: &str, latest: &str, ops: &[Op], initial_cursor: usize) -> ValidationResult {
    try_validate(stale, latest, ops, initial_cursor).into()
}

/// Decodes raw operation records with the given key names, then validates.
/// A malformed record surfaces as the result's reason before any operation
/// is applied.
pub fn validate_records(
    stale: &str,
    latest: &str,
    records: &[Value],
    keys: &OpKeys,
    initial_cursor: usize,
) -> ValidationResult {
    decode_ops(records, keys)
        .map_err(ValidateError::from)
        .and_then(|ops| try_validate(stale, latest, &ops, initial_cursor))
        .into()
}

/// Validates an edit log serialized as a JSON array string, using the
/// default key names.
pub fn validate_json(
    stale: &str,
    latest: &str,
    ot_json: &str,
    initial_cursor: usize,
) -> ValidationResult {
    decode_ops_json(ot_json, &OpKeys::default())
        .map_err(ValidateError::from)
        .and_then(|ops| try_validate(stale, latest, &ops, initial_cursor))
        .into()
}
