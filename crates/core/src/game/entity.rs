//! Components-on-entity: a GB entity is just a name plus whichever optional
//! components the author attached to it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub x: i16,
    pub y: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub width: u8,
    pub height: u8,
}

/// Per-entity physics tuning. Global behaviour (gravity, friction, bounce)
/// lives on [`crate::game::physics::PhysicsWorld`]; this is just the
/// per-body mass and velocity cap the world update clamps against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub mass: f32,
    pub max_velocity: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    pub position: Option<Position>,
    pub velocity: Option<Velocity>,
    pub sprite: Option<String>,
    pub hitbox: Option<Hitbox>,
    pub state_machine: Option<String>,
    pub tag: Option<String>,
    pub physics: Option<PhysicsBody>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            velocity: None,
            sprite: None,
            hitbox: None,
            state_machine: None,
            tag: None,
            physics: None,
        }
    }
}
