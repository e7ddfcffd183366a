//! `_physics_world_update`: per-entity gravity/friction/velocity-clamp
//! blocks, then collision-pair response blocks.

use crate::game::Game;

use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    w.block("void _physics_world_update(void)", |w| {
        let physics_entities: Vec<_> = game.entities.iter().filter(|e| e.physics.is_some()).collect();

        if physics_entities.is_empty() {
            w.line("// No entities with physics component");
        } else {
            for entity in &physics_entities {
                w.line(format!("// Physics update for {}", entity.name));
                w.line(format!("{}_velocity_y += PHYSICS_GRAVITY;", entity.name));
                w.line(format!("{}_velocity_x = ({}_velocity_x * PHYSICS_FRICTION) >> 8;", entity.name, entity.name));
                w.line(format!("{}_velocity_y = ({}_velocity_y * PHYSICS_FRICTION) >> 8;", entity.name, entity.name));
                w.line(format!("{}_x += {}_velocity_x >> 8;", entity.name, entity.name));
                w.line(format!("{}_y += {}_velocity_y >> 8;", entity.name, entity.name));
            }
        }

        if let Some(world) = &game.physics_world {
            for (tag_a, tag_b) in &world.collision_pairs {
                w.line(format!("// Collision response: {tag_a} <-> {tag_b}"));
                w.line(format!(
                    "collision_respond(\"{tag_a}\", \"{tag_b}\", PHYSICS_BOUNCE);"
                ));
            }
        }
    });
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_placeholder_comment_with_no_physics_entities() {
        let game = Game::new("demo");
        let mut w = CWriter::new();
        emit(&mut w, &game);
        assert!(w.finish().contains("// No entities with physics component"));
    }
}
