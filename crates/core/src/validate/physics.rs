//! Per-entity physics sanity: positive mass is required; velocity cap,
//! friction and gravity ranges are advisory.

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::Game;

const MAX_VELOCITY_MAGNITUDE: f32 = 127.0;
const MAX_FRICTION: f32 = 1.5;
const MIN_GRAVITY: f32 = -2.0;
const MAX_GRAVITY: f32 = 2.0;

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();

    for entity in &game.entities {
        let Some(body) = entity.physics else { continue };
        if body.mass <= 0.0 {
            result.errors.push(
                Diag::new(
                    DiagCategory::Physics,
                    format!("entity {:?} has non-positive mass {}", entity.name, body.mass),
                )
                .at(entity.name.clone()),
            );
        }
        let (vx, vy) = body.max_velocity;
        if vx.abs() > MAX_VELOCITY_MAGNITUDE || vy.abs() > MAX_VELOCITY_MAGNITUDE {
            result.warnings.push(
                Diag::new(
                    DiagCategory::Physics,
                    format!("entity {:?} max velocity ({vx}, {vy}) exceeds {MAX_VELOCITY_MAGNITUDE}", entity.name),
                )
                .at(entity.name.clone()),
            );
        }
    }

    if let Some(world) = &game.physics_world {
        if !(0.0..=MAX_FRICTION).contains(&world.friction) {
            result.warnings.push(Diag::new(
                DiagCategory::Physics,
                format!("friction {} outside 0..={MAX_FRICTION}", world.friction),
            ));
        }
        if !(MIN_GRAVITY..=MAX_GRAVITY).contains(&world.gravity) {
            result.warnings.push(Diag::new(
                DiagCategory::Physics,
                format!("gravity {} outside {MIN_GRAVITY}..={MAX_GRAVITY}", world.gravity),
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Entity, PhysicsBody, PhysicsWorld};

    #[test]
    fn non_positive_mass_errors() {
        let mut game = Game::new("demo");
        let mut entity = Entity::new("player");
        entity.physics = Some(PhysicsBody { mass: 0.0, max_velocity: (10.0, 10.0) });
        game.entities.push(entity);
        let result = check(&game);
        assert!(!result.is_valid());
    }

    #[test]
    fn oversized_velocity_warns_not_errors() {
        let mut game = Game::new("demo");
        let mut entity = Entity::new("player");
        entity.physics = Some(PhysicsBody { mass: 1.0, max_velocity: (200.0, 0.0) });
        game.entities.push(entity);
        let result = check(&game);
        assert!(result.is_valid());
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn world_gravity_out_of_range_warns() {
        let mut game = Game::new("demo");
        game.physics_world = Some(PhysicsWorld { gravity: 5.0, friction: 1.0, bounce: 0.0, collision_pairs: vec![] });
        let result = check(&game);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|d| d.message.contains("gravity")));
    }
}
