//! Case-sensitive uniqueness of variable and sprite names.

use std::collections::HashSet;

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::Game;

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();
    check_unique(&mut result, "variable", game.variables.iter().map(|v| v.name.as_str()));
    check_unique(&mut result, "sprite", game.sprites.iter().map(|s| s.name.as_str()));
    result
}

fn check_unique<'a>(result: &mut ValidationResult, kind: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            result.errors.push(
                Diag::new(DiagCategory::DuplicateName, format!("duplicate {kind} name {name:?}"))
                    .at(name.to_string()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ScalarType, GBVar};

    #[test]
    fn duplicate_variable_names_error() {
        let mut game = Game::new("demo");
        game.variables.push(GBVar::scalar("hp", ScalarType::U8, 0));
        game.variables.push(GBVar::scalar("hp", ScalarType::U8, 0));
        let result = check(&game);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].category, DiagCategory::DuplicateName);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut game = Game::new("demo");
        game.variables.push(GBVar::scalar("hp", ScalarType::U8, 0));
        game.variables.push(GBVar::scalar("HP", ScalarType::U8, 0));
        let result = check(&game);
        assert!(result.is_valid());
    }
}
