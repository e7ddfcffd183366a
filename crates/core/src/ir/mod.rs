//! The intermediate representation shared by the validator, the test
//! interpreter, and the code generator.
//!
//! The IR is two disjoint trees. [`expr::Expression`] is pure: it only ever
//! produces a value from the current variable store and other expressions.
//! [`stmt::Statement`] is side-effectful: it is the only thing that can
//! change a variable, move a sprite, or trigger a scene change. No IR node
//! carries target-C text — the only strings an IR node carries are
//! user-visible identifiers (variable names, scene keys, asset paths,
//! literal dialog text). Every variant here is final; C5 (`validate`), C6
//! (`interp`) and C7 (`codegen`) all exhaustively match over it, so adding a
//! variant is a multi-site change by design (see `spec.md` §9).

pub mod expr;
pub mod stmt;
pub mod visit;

pub use expr::{BinaryOp, BoolOp, CompareOp, Condition, Expression, FieldAccess, Literal, UnaryOp};
pub use stmt::{CameraTransitionKind, Easing, Statement};
