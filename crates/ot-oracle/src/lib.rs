//! Validation oracle for plain-text operational-transformation edit logs.
//!
//! Given a stale document, a latest document, and an ordered log of
//! skip / delete / insert operations, [`validate`] decides whether replaying
//! the log over the stale text from the initial cursor reproduces the latest
//! text, and reports the first violated invariant when it does not.
//!
//! This crate does not transform concurrent logs against each other and
//! keeps no document history; it only replays and checks a single log.

pub mod op;
pub mod state;
pub mod validate;

pub use op::{decode_op, decode_ops, decode_ops_json, Op, OpDecodeError, OpKeys};
pub use state::{DocumentState, StateError};
pub use validate::{
    try_validate, validate, validate_json, validate_records, ValidateError, ValidationResult,
};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
