//! Lowers a declarative Game Boy / Game Boy Color game description into a
//! typed intermediate representation, validates it against hardware
//! constraints, and emits C source targeting a GBDK-style toolchain.
//!
//! Pipeline: [`builder`] assembles a [`game::Game`] from a fluent DSL,
//! backed by [`services`] registries during construction; [`validate`]
//! checks the assembled game against hardware and consistency constraints;
//! [`interp`] re-executes recorded IR for assertion-style tests; [`codegen`]
//! lowers a validated game to a C translation unit. [`ir`] is the shared
//! tree both the validator and the code generator walk. [`value`] is the
//! Game-Boy-faithful numeric foundation everything else is built on.

pub mod builder;
pub mod codegen;
pub mod error;
pub mod game;
pub mod interp;
pub mod ir;
pub mod logging;
pub mod services;
pub mod validate;
pub mod value;

pub use builder::GameBuilder;
pub use error::BuildError;
pub use game::Game;
pub use interp::Harness;
pub use validate::{compile, validate, ValidationException, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Button;
    use crate::value::U8;

    /// End-to-end smoke test: build a minimal game, validate it, and
    /// generate C from it, exercising every stage of the pipeline.
    #[test]
    fn builds_validates_and_generates_a_minimal_game() {
        let game = GameBuilder::new("smoke")
            .scene("title", |_scene| {})
            .start_scene("title")
            .input_buffer("jump", Button::A, U8::new(6), None)
            .build()
            .expect("minimal game should build");

        let result = validate(&game);
        assert!(result.is_valid());

        let source = compile(&game).expect("a valid game should compile");
        assert!(source.contains("void main(void)"));
        assert!(source.contains("static UINT8 buffer_0;"));
    }
}
