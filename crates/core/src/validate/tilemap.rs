//! Tilemap shape: tile data and, if present, the collision grid must match
//! `width_tiles * height_tiles`.

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::Game;

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (name, map) in &game.tilemaps {
        let expected = map.width_tiles as usize * map.height_tiles as usize;
        if map.tile_data.len() != expected {
            result.errors.push(
                Diag::new(
                    DiagCategory::Tilemap,
                    format!(
                        "tilemap {name:?} tile data has {} entries, expected {expected} ({}x{})",
                        map.tile_data.len(),
                        map.width_tiles,
                        map.height_tiles
                    ),
                )
                .at(name.clone()),
            );
        }
        if let Some(collision) = &map.collision_data {
            if collision.len() != expected {
                result.errors.push(
                    Diag::new(
                        DiagCategory::Tilemap,
                        format!(
                            "tilemap {name:?} collision data has {} entries, expected {expected}",
                            collision.len()
                        ),
                    )
                    .at(name.clone()),
                );
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TileMap;

    fn map(tile_data: Vec<u8>, collision: Option<Vec<u8>>) -> TileMap {
        TileMap {
            name: "overworld".into(),
            asset: "overworld.png".into(),
            width_tiles: 10,
            height_tiles: 10,
            tile_data,
            layers: Vec::new(),
            collision_data: collision,
        }
    }

    #[test]
    fn mismatched_tile_data_length_errors() {
        let mut game = Game::new("demo");
        game.tilemaps.insert("overworld".into(), map(vec![0; 50], None));
        assert!(!check(&game).is_valid());
    }

    #[test]
    fn well_sized_tilemap_is_valid() {
        let mut game = Game::new("demo");
        game.tilemaps.insert("overworld".into(), map(vec![0; 100], Some(vec![0; 100])));
        assert!(check(&game).is_valid());
    }
}
