//! Tween domain checks: duration must be positive, endpoints must fit the
//! target variable's declared range.

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::{Game, ScalarType, VarType};

const U8_JUMP_WARNING_THRESHOLD: i64 = 200;

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (name, tween) in &game.tweens {
        if tween.duration.to_int() < 1 {
            result.errors.push(
                Diag::new(DiagCategory::Tween, format!("tween {name:?} has duration {} < 1", tween.duration))
                    .at(name.clone()),
            );
        }

        let Some(target) = game.lookup_variable(&tween.target) else { continue };
        if let VarType::Scalar(scalar) = target.ty {
            let (min, max) = scalar.domain();
            if !(min..=max).contains(&tween.from) {
                result.errors.push(Diag::new(
                    DiagCategory::Tween,
                    format!("tween {name:?} start {} outside {:?} domain {min}..={max}", tween.from, tween.target),
                ));
            }
            if !(min..=max).contains(&tween.to) {
                result.errors.push(Diag::new(
                    DiagCategory::Tween,
                    format!("tween {name:?} end {} outside {:?} domain {min}..={max}", tween.to, tween.target),
                ));
            }
            if scalar == ScalarType::U8 && (tween.to - tween.from).abs() > U8_JUMP_WARNING_THRESHOLD {
                result.warnings.push(Diag::new(
                    DiagCategory::Tween,
                    format!("tween {name:?} jump of {} on a u8 variable risks visual jumpiness", tween.to - tween.from),
                ));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tween;
    use crate::ir::Easing;
    use crate::value::U16;

    fn tween(from: i64, to: i64, duration: u16) -> Tween {
        Tween { name: "t".into(), target: "hp".into(), from, to, duration: U16::new(duration), easing: Easing::Linear }
    }

    #[test]
    fn zero_duration_errors() {
        let mut game = Game::new("demo");
        game.variables.push(crate::game::GBVar::scalar("hp", ScalarType::U8, 0));
        game.tweens.insert("t".into(), tween(0, 10, 0));
        let result = check(&game);
        assert!(!result.is_valid());
    }

    #[test]
    fn out_of_domain_endpoint_errors() {
        let mut game = Game::new("demo");
        game.variables.push(crate::game::GBVar::scalar("hp", ScalarType::U8, 0));
        game.tweens.insert("t".into(), tween(0, 300, 10));
        let result = check(&game);
        assert!(!result.is_valid());
    }

    #[test]
    fn large_u8_jump_warns() {
        let mut game = Game::new("demo");
        game.variables.push(crate::game::GBVar::scalar("hp", ScalarType::U8, 0));
        game.tweens.insert("t".into(), tween(0, 250, 10));
        let result = check(&game);
        assert!(result.is_valid());
        assert!(!result.warnings.is_empty());
    }
}
