//! The file header: includes and a version banner, carrying no per-build
//! non-determinism (no timestamps, no absolute paths).

use crate::game::Game;

use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    w.line("/* Generated C source. Do not edit by hand. */");
    w.line(format!("/* project: {} */", game.name));
    w.line("#include <gb/gb.h>");
    w.line("#include <stdint.h>");
    if !game.tweens.is_empty() {
        w.line("#include <string.h>");
    }
    if game.config.gbc_support {
        w.line("#define GBC_SUPPORT 1");
    }
    w.blank();
}
