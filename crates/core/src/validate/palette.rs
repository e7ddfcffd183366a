//! GBC palette shape: exactly four colours, each within the 15-bit BGR555
//! range.

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::{Game, Palette};

const MAX_COLOR: u16 = 0x7FFF;

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();
    for palette in &game.palettes {
        check_one(&mut result, palette);
    }
    result
}

fn check_one(result: &mut ValidationResult, palette: &Palette) {
    if palette.colors.len() != Palette::REQUIRED_LEN {
        result.errors.push(
            Diag::new(
                DiagCategory::Palette,
                format!(
                    "palette {:?} has {} colours, must have exactly {}",
                    palette.name,
                    palette.colors.len(),
                    Palette::REQUIRED_LEN
                ),
            )
            .at(palette.name.clone()),
        );
    }
    for color in &palette.colors {
        if color.to_int() > MAX_COLOR {
            result.errors.push(
                Diag::new(
                    DiagCategory::GbcColor,
                    format!(
                        "palette {:?} has colour {:#06x} outside 0..=0x7FFF",
                        palette.name,
                        color.to_int()
                    ),
                )
                .at(palette.name.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PaletteKind;
    use crate::value::GBCColor;

    #[test]
    fn palette_with_four_colours_is_valid() {
        let mut game = Game::new("demo");
        game.palettes.push(Palette {
            name: "bg".into(),
            kind: PaletteKind::Background,
            colors: vec![GBCColor::BLACK, GBCColor::WHITE, GBCColor::BLACK, GBCColor::WHITE],
        });
        assert!(check(&game).is_valid());
    }

    #[test]
    fn palette_with_wrong_length_errors() {
        let mut game = Game::new("demo");
        game.palettes.push(Palette { name: "bg".into(), kind: PaletteKind::Background, colors: vec![GBCColor::BLACK] });
        let result = check(&game);
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].category, DiagCategory::Palette);
    }
}
