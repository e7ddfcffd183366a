//! C source generation: lowers a validated `Game` into a single
//! deterministic C translation unit, one emission layer at a time.
//!
//! Layer order matters for declaration-before-use (storage before the
//! functions that reference it) and mirrors the main loop's frame-order
//! contract: input-buffer decrement, buttons latch, scene frame, per-entity
//! state update, physics update, camera update, tween update, draw.

mod camera;
mod constants;
mod dialog;
mod entity_update;
mod input_buffer;
mod ir_emit;
mod physics;
mod preamble;
mod sanitize;
mod scene;
mod sound;
mod state_enum;
mod storage;
mod tween;
mod writer;

use crate::game::Game;

use writer::CWriter;

pub fn generate(game: &Game) -> String {
    let mut w = CWriter::new();

    preamble::emit(&mut w, game);
    constants::emit(&mut w, game);
    storage::emit(&mut w, game);
    state_enum::emit(&mut w, game);
    entity_update::emit(&mut w, game);
    physics::emit(&mut w, game);
    camera::emit(&mut w, game);
    dialog::emit(&mut w, game);
    sound::emit(&mut w, game);
    tween::emit(&mut w, game);
    scene::emit(&mut w, game);

    w.finish()
}
