//! Hardware-constraint validation: `validate(&Game)` never fails — it always
//! returns a full [`ValidationResult`] — and the `compile*` helpers layer
//! the various propagation policies of spec.md §4.4 on top of it.

mod array_bounds;
mod asset;
mod duplicates;
mod oam;
mod palette;
mod physics;
mod state_machine;
mod tilemap;
mod tween;

pub use asset::{validate_png_header, PngHeaderCheck};

use log::warn;

use crate::game::Game;

/// The closed tag set a [`Diag`] can carry. Callers key off this, never off
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagCategory {
    OamLimit,
    StateMachine,
    DuplicateName,
    GbcColor,
    Physics,
    Tween,
    ArrayBounds,
    Asset,
    Tilemap,
    Palette,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub category: DiagCategory,
    pub message: String,
    pub location: Option<String>,
}

impl Diag {
    pub fn new(category: DiagCategory, message: impl Into<String>) -> Self {
        Self { category, message: message.into(), location: None }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub errors: Vec<Diag>,
    pub warnings: Vec<Diag>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Runs every check family over `game` and returns the combined result.
/// Idempotent: calling this twice on the same `game` yields equal results,
/// since every check is a pure function of the snapshot it's given.
pub fn validate(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.merge(oam::check(game));
    result.merge(duplicates::check(game));
    result.merge(state_machine::check(game));
    result.merge(palette::check(game));
    result.merge(physics::check(game));
    result.merge(tween::check(game));
    result.merge(array_bounds::check(game));
    result.merge(tilemap::check(game));
    result
}

/// Carries a full [`ValidationResult`] that contained at least one error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("compilation failed with {} error(s):\n{}", .result.errors.len(), render_errors(.result))]
pub struct ValidationException {
    pub result: ValidationResult,
}

fn render_errors(result: &ValidationResult) -> String {
    result
        .errors
        .iter()
        .map(|d| format!("  [{:?}] {}", d.category, d.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validates, then generates — refusing to emit any C when the game has
/// validation errors.
pub fn compile(game: &Game) -> Result<String, ValidationException> {
    let result = validate(game);
    if !result.is_valid() {
        return Err(ValidationException { result });
    }
    Ok(crate::codegen::generate(game))
}

/// Validates, logs every diagnostic at `warn!`, and generates regardless of
/// outcome.
pub fn compile_allow_warnings(game: &Game) -> String {
    let result = validate(game);
    for diag in result.errors.iter().chain(result.warnings.iter()) {
        warn!("[{:?}] {}", diag.category, diag.message);
    }
    crate::codegen::generate(game)
}

/// Skips validation entirely; for test fixtures that intentionally violate
/// a hardware constraint but still need to inspect the emitted C.
pub fn compile_for_test(game: &Game) -> String {
    crate::codegen::generate(game)
}

/// Validates and generates unconditionally, returning both.
pub fn compile_with_validation(game: &Game) -> (String, ValidationResult) {
    let result = validate(game);
    (crate::codegen::generate(game), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn validate_is_idempotent() {
        let game = Game::new("demo");
        assert_eq!(validate(&game), validate(&game));
    }
}
