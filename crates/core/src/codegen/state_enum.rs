//! `STATE_<ENTITY>_<STATE>` constants, assigned in declaration order.

use crate::game::Game;

use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    for (owner, machine) in &game.state_machines {
        for (index, state) in machine.states.iter().enumerate() {
            w.line(format!(
                "#define STATE_{}_{} {}",
                owner.to_uppercase(),
                state.name.to_uppercase(),
                index
            ));
        }
    }
    if !game.state_machines.is_empty() {
        w.blank();
    }
}
