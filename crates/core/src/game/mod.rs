//! The in-memory game description: the typed record shape a build produces
//! and the validator, interpreter and code generator all consume.

pub mod animation;
pub mod camera;
pub mod dialog;
pub mod entity;
pub mod game;
pub mod input_buffer;
pub mod palette;
pub mod physics;
pub mod scene;
pub mod sound;
pub mod sprite;
pub mod state_machine;
pub mod tilemap;
pub mod tween;
pub mod variable;

pub use animation::{Animation, AnimationMode};
pub use camera::Camera;
pub use dialog::Dialog;
pub use entity::{Entity, Hitbox, PhysicsBody, Position, Velocity};
pub use game::{Game, GameConfig, OamUsage};
pub use input_buffer::{Button, InputBuffer};
pub use palette::{Palette, PaletteKind};
pub use physics::PhysicsWorld;
pub use scene::Scene;
pub use sound::{Channel, Music, SoundEffect};
pub use sprite::{Pool, Sprite};
pub use state_machine::{State, StateMachine, Transition};
pub use tilemap::{Layer, TileMap, TILE_SIZE};
pub use tween::Tween;
pub use variable::{GBVar, InitialValue, ScalarType, VarType};
