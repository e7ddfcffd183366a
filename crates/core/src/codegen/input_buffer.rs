//! Input buffer decrement-then-press-detect, plus the `consumed`/`active`
//! accessor text.

use crate::game::Game;

use super::writer::CWriter;

/// `buffer_<b> > 0u && (buffer_<b> = 0u, 1u)` — reads and resets the latch.
pub fn consumed_expr(id: usize) -> String {
    format!("buffer_{id} > 0u && (buffer_{id} = 0u, 1u)")
}

/// `(buffer_<b> > 0u)` — reads without resetting.
pub fn active_expr(id: usize) -> String {
    format!("(buffer_{id} > 0u)")
}

pub fn emit(w: &mut CWriter, game: &Game) {
    for buffer in game.input_buffers.values() {
        let id = buffer.id;
        w.line(format!("if (buffer_{id} > 0) buffer_{id}--;"));
        w.block(format!("if ((_joypad & {:#04x}) && !(_prev_joypad & {:#04x}))", buffer.button.mask(), buffer.button.mask()), |w| {
            w.line(format!("buffer_{id} = {};", buffer.window.to_int()));
        });
    }
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Button, Game};
    use crate::value::U8;

    #[test]
    fn matches_input_buffer_scenario() {
        let mut game = Game::new("demo");
        game.input_buffers.insert(
            "jump".into(),
            crate::game::InputBuffer { name: "jump".into(), button: Button::A, window: U8::new(6), id: 0, custom_name: None },
        );
        let mut w = CWriter::new();
        emit(&mut w, &game);
        let output = w.finish();
        assert!(output.contains("if (buffer_0 > 0) buffer_0--;"));
        assert!(output.contains("_joypad & 0x10"));
        assert!(output.contains("buffer_0 = 6;"));
    }

    #[test]
    fn consumed_and_active_expressions_match_contract() {
        assert_eq!(consumed_expr(0), "buffer_0 > 0u && (buffer_0 = 0u, 1u)");
        let active = active_expr(0);
        assert_eq!(active, "(buffer_0 > 0u)");
        assert!(!active.contains(','));
    }
}
