//! OAM slot budget: at most 40 hardware sprite registers across named
//! sprites and pools.

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::Game;

const OAM_SLOTS: u32 = 40;
const OAM_APPROACHING: u32 = 35;

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();
    let usage = game.all_oam_consumers();

    for pool in &usage.pools {
        if pool.count > OAM_SLOTS {
            result.errors.push(
                Diag::new(
                    DiagCategory::OamLimit,
                    format!(
                        "pool {:?} alone reserves {} slots, exceeds OAM limit of {OAM_SLOTS}",
                        pool.name, pool.count
                    ),
                )
                .at(pool.name.clone()),
            );
        }
    }

    if usage.total > OAM_SLOTS {
        result.errors.push(Diag::new(
            DiagCategory::OamLimit,
            format!("{} OAM slots requested, exceeds limit of {OAM_SLOTS}", usage.total),
        ));
    } else if usage.total == OAM_SLOTS {
        result.warnings.push(Diag::new(DiagCategory::OamLimit, "at OAM limit"));
    } else if usage.total >= OAM_APPROACHING {
        result.warnings.push(Diag::new(DiagCategory::OamLimit, "approaching OAM limit"));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Pool, Sprite};

    fn sprite(name: &str) -> Sprite {
        Sprite { name: name.into(), asset: "s.png".into(), width: 8, height: 8, oam_slot: 0 }
    }

    fn game_with_sprites(n: usize) -> Game {
        let mut game = Game::new("demo");
        for i in 0..n {
            game.sprites.push(sprite(&format!("s{i}")));
        }
        game
    }

    #[test]
    fn thirty_eight_sprites_warns_approaching() {
        let result = check(&game_with_sprites(38));
        assert!(result.warnings.iter().any(|d| d.message.contains("approaching")));
        assert!(result.is_valid());
    }

    #[test]
    fn forty_sprites_warns_at_limit() {
        let result = check(&game_with_sprites(40));
        assert!(result.warnings.iter().any(|d| d.message.contains("at OAM limit")));
    }

    #[test]
    fn forty_five_sprites_errors_exceeds() {
        let result = check(&game_with_sprites(45));
        assert!(result.errors.iter().any(|d| d.message.contains("exceeds")));
        assert!(!result.is_valid());
    }

    #[test]
    fn oversized_pool_alone_errors() {
        let mut game = Game::new("demo");
        game.pools.push(Pool { name: "bullets".into(), asset: "b.png".into(), width: 8, height: 8, count: 50 });
        let result = check(&game);
        assert!(result.errors.iter().any(|d| d.message.contains("bullets") && d.message.contains("exceeds OAM limit")));
    }
}
