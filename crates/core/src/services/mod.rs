//! Construction-time registries: where assets, sprites, variables and
//! entities get registered before `GameBuilder::build()` freezes them into
//! a `Game`. Each registry is a trait with an in-memory `Default` form and
//! a `Mock` form instrumented for tests.

mod asset;
mod entity;
mod sprite;
mod variable;

pub use asset::{AssetService, DefaultAssetService, MockAssetService};
pub use entity::{DefaultEntityService, EntityService, MockEntityService};
pub use sprite::{DefaultSpriteService, MockSpriteService, SpriteService};
pub use variable::{DefaultVariableService, MockVariableService, VariableService};

/// Aggregates mock registries for tests; each can be overridden
/// individually, and the whole bundle resets together.
#[derive(Debug, Default)]
pub struct TestGameServices {
    pub assets: MockAssetService,
    pub sprites: MockSpriteService,
    pub variables: MockVariableService,
    pub entities: MockEntityService,
}

impl TestGameServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.assets.reset();
        self.sprites.reset();
        self.variables.reset();
        self.entities.reset();
    }
}
