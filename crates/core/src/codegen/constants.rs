//! Physics fixed-point constants, input-buffer windows, tween durations,
//! palette tables and tilemap data tables.

use crate::game::Game;

use super::writer::CWriter;

/// Rounds `value * 256` half-up into an 8.8 fixed-point integer. See
/// `DESIGN.md` for why half-up was picked over banker's rounding — either
/// is spec-conformant, this just needs to be one fixed, documented choice.
pub fn to_fixed_8_8(value: f32) -> i32 {
    (value * 256.0 + 0.5).floor() as i32
}

pub fn emit(w: &mut CWriter, game: &Game) {
    if let Some(world) = &game.physics_world {
        w.line(format!("#define PHYSICS_GRAVITY {}", to_fixed_8_8(world.gravity)));
        w.line(format!("#define PHYSICS_FRICTION {}", to_fixed_8_8(world.friction)));
        w.line(format!("#define PHYSICS_BOUNCE {}", to_fixed_8_8(world.bounce)));
        w.blank();
    }

    for buffer in game.input_buffers.values() {
        w.line(format!("#define INPUT_BUFFER_{}_WINDOW {}", buffer.id, buffer.window.to_int()));
    }
    if !game.input_buffers.is_empty() {
        w.blank();
    }

    for (name, tween) in &game.tweens {
        w.line(format!("#define TWEEN_{}_DURATION {}", sanitized(name), tween.duration.to_int()));
    }
    if !game.tweens.is_empty() {
        w.blank();
    }

    for palette in &game.palettes {
        let values: Vec<String> = palette.colors.iter().map(|c| format!("0x{:04X}", c.to_int())).collect();
        w.line(format!("static const uint16_t PALETTE_{}[4] = {{{}}};", sanitized(&palette.name), values.join(", ")));
    }
    if !game.palettes.is_empty() {
        w.blank();
    }

    for (name, map) in &game.tilemaps {
        let values: Vec<String> = map.tile_data.iter().map(|b| b.to_string()).collect();
        w.line(format!(
            "static const uint8_t TILEMAP_{}[{}] = {{{}}};",
            sanitized(name),
            map.tile_data.len(),
            values.join(", ")
        ));
        if let Some(collision) = &map.collision_data {
            let values: Vec<String> = collision.iter().map(|b| b.to_string()).collect();
            w.line(format!(
                "static const uint8_t TILEMAP_{}_COLLISION[{}] = {{{}}};",
                sanitized(name),
                collision.len(),
                values.join(", ")
            ));
        }
    }
    if !game.tilemaps.is_empty() {
        w.blank();
    }
}

fn sanitized(name: &str) -> String {
    super::sanitize::sanitize_identifier(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_matches_scenario_4() {
        assert_eq!(to_fixed_8_8(0.5), 128);
        assert!([230, 231].contains(&to_fixed_8_8(0.9)));
        assert!([76, 77].contains(&to_fixed_8_8(0.3)));
    }
}
