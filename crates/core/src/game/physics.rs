//! The global physics world: gravity, friction, bounce and the collision
//! pairs the generated `_physics_world_update` reacts to. Per-entity tuning
//! (mass, max velocity) lives on [`crate::game::entity::PhysicsBody`].

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsWorld {
    pub gravity: f32,
    pub friction: f32,
    pub bounce: f32,
    pub collision_pairs: Vec<(String, String)>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self { gravity: 0.0, friction: 1.0, bounce: 0.0, collision_pairs: Vec::new() }
    }
}
