//! Document state machine: applies decoded operations to a (text, cursor)
//! pair, enforcing per-kind bounds.
//!
//! All offsets and lengths are counted in `char`s, not bytes, so multi-byte
//! text behaves the same as in the upstream logs.

use thiserror::Error;

use crate::op::Op;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("initial cursor position must be between 0 and {len}, got {cursor}")]
    InvalidInitialCursor { cursor: usize, len: usize },
    #[error("cursor moved out of bounds with {op} op: got position {attempted}, text length {len}")]
    CursorOutOfBounds {
        op: &'static str,
        attempted: i64,
        len: usize,
    },
    #[error("cannot delete a negative count: got {count}")]
    NegativeDeleteCount { count: i64 },
}

/// Mutable document state threaded through one validation pass.
///
/// Skip and delete use a strict `< len` upper bound, both at initialization
/// and mid-sequence: the cursor may never land exactly on `len`, and a
/// delete may never consume a span whose end lands exactly on `len`. This
/// matches the upstream log producers' accept/reject behavior; loosening it
/// to `<=` would accept sequences they reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    chars: Vec<char>,
    cursor: usize,
}

impl DocumentState {
    pub fn new(text: &str, cursor: usize) -> Result<Self, StateError> {
        let chars: Vec<char> = text.chars().collect();
        if cursor >= chars.len() {
            return Err(StateError::InvalidInitialCursor {
                cursor,
                len: chars.len(),
            });
        }
        Ok(Self { chars, cursor })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Document length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current text, materialized from the char buffer.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Applies one operation, checked against the state as left by all
    /// prior operations. On error the state is unchanged.
    pub fn apply(&mut self, op: &Op) -> Result<(), StateError> {
        match op {
            Op::Skip { count } => {
                // Saturating: a sum clamped at the i64 limits is out of
                // bounds for any real text length anyway.
                let attempted = (self.cursor as i64).saturating_add(*count);
                if attempted < 0 || attempted >= self.chars.len() as i64 {
                    return Err(StateError::CursorOutOfBounds {
                        op: "skip",
                        attempted,
                        len: self.chars.len(),
                    });
                }
                self.cursor = attempted as usize;
            }
            Op::Delete { count } => {
                if *count < 0 {
                    return Err(StateError::NegativeDeleteCount { count: *count });
                }
                let end = (self.cursor as i64).saturating_add(*count);
                if end >= self.chars.len() as i64 {
                    return Err(StateError::CursorOutOfBounds {
                        op: "delete",
                        attempted: end,
                        len: self.chars.len(),
                    });
                }
                // Cursor stays put; the span cursor..cursor+count is removed.
                self.chars.drain(self.cursor..self.cursor + *count as usize);
            }
            Op::Insert { chars } => {
                let inserted = chars.chars().count();
                self.chars.splice(self.cursor..self.cursor, chars.chars());
                self.cursor += inserted;
            }
        }
        Ok(())
    }
}
