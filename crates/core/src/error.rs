//! Error types for the core's two fallible boundaries: building a [`Game`]
//! and (elsewhere, in [`crate::validate`]) compiling a validated one.
//!
//! [`Game`]: crate::game::Game
//!
//! Per `spec.md` §7, internal invariant violations (an IR node with a
//! variant the generator forgot to match, a lookup that should have been
//! caught by the validator) are programmer bugs, not recoverable errors —
//! they `panic!`/`unreachable!` at the exhaustive-match site rather than
//! returning a `Result` variant here.

use crate::value::ValueError;

/// A DSL-time range error: these are raised immediately during `GameBuilder`
/// construction, never deferred to the validator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("array index {index} out of bounds for array of length {len}")]
    ArrayIndexOutOfBounds { index: i64, len: usize },
    #[error("input buffer window {window} out of range 1..=255")]
    InputBufferWindowOutOfRange { window: i64 },
    #[error("duplicate name {name:?} for {kind}")]
    DuplicateName { kind: &'static str, name: String },
    #[error("no start scene was set")]
    MissingStartScene,
    #[error(transparent)]
    Value(#[from] ValueError),
}
