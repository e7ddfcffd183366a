//! Static storage declarations: one per `GBVar`, one per state-machine-
//! owning entity's state/next/changed trio, one per input buffer.

use crate::game::{Game, ScalarType, VarType};

use super::writer::CWriter;

fn c_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::U8 => "UINT8",
        ScalarType::I8 => "INT8",
        ScalarType::U16 => "UINT16",
        ScalarType::I16 => "INT16",
    }
}

pub fn emit(w: &mut CWriter, game: &Game) {
    for var in &game.variables {
        match var.ty {
            VarType::Scalar(scalar) => {
                w.line(format!("static {} {};", c_type(scalar), var.name));
            }
            VarType::Array { elem, len } => {
                w.line(format!("static {} {}[{}];", c_type(elem), var.name, len));
            }
        }
    }
    if !game.variables.is_empty() {
        w.blank();
    }

    for owner in game.state_machines.keys() {
        w.line(format!("static UINT8 _{owner}_state;"));
        w.line(format!("static UINT8 _{owner}_next;"));
        w.line(format!("static UINT8 _{owner}_changed;"));
    }
    if !game.state_machines.is_empty() {
        w.blank();
    }

    for buffer in game.input_buffers.values() {
        w.line(format!("static UINT8 buffer_{};", buffer.id));
    }
    if !game.input_buffers.is_empty() {
        w.blank();
    }

    w.line("static UINT8 _joypad;");
    w.line("static UINT8 _prev_joypad;");
    w.line("static UINT16 _frame_count;");
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Button, Game, InputBuffer};
    use crate::value::U8;

    #[test]
    fn input_buffer_storage_matches_scenario() {
        let mut game = Game::new("demo");
        game.input_buffers.insert(
            "jump".into(),
            InputBuffer { name: "jump".into(), button: Button::A, window: U8::new(6), id: 0, custom_name: None },
        );
        let mut w = CWriter::new();
        emit(&mut w, &game);
        assert!(w.finish().contains("static UINT8 buffer_0;"));
    }
}
