//! Per-entity update functions: an enter/tick/transition/exit switch bank
//! over the entity's state machine.

use crate::game::Game;
use crate::ir::Condition;

use super::ir_emit::{expr_c, stmt_c};
use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    for (owner, machine) in &game.state_machines {
        w.block(format!("void {owner}_update(void)"), |w| {
            emit_enter_switch(w, owner, machine);
            emit_tick_switch(w, owner, machine);
            emit_transition_switch(w, owner, machine);
            emit_exit_switch(w, owner, machine);
        });
        w.blank();
    }
}

fn state_const(owner: &str, state: &str) -> String {
    format!("STATE_{}_{}", owner.to_uppercase(), state.to_uppercase())
}

fn emit_enter_switch(w: &mut CWriter, owner: &str, machine: &crate::game::StateMachine) {
    w.block(format!("if (_{owner}_changed)"), |w| {
        w.block(format!("switch (_{owner}_state)"), |w| {
            for state in &machine.states {
                w.line(format!("case {}:", state_const(owner, &state.name)));
                w.indent();
                for stmt in &state.on_enter {
                    stmt_c(w, stmt);
                }
                w.line("break;");
                w.dedent();
            }
        });
        w.line(format!("_{owner}_changed = 0;"));
    });
}

fn emit_tick_switch(w: &mut CWriter, owner: &str, machine: &crate::game::StateMachine) {
    w.block(format!("switch (_{owner}_state)"), |w| {
        for state in &machine.states {
            w.line(format!("case {}:", state_const(owner, &state.name)));
            w.indent();
            for stmt in &state.on_tick {
                stmt_c(w, stmt);
            }
            w.line("break;");
            w.dedent();
        }
    });
}

fn emit_transition_switch(w: &mut CWriter, owner: &str, machine: &crate::game::StateMachine) {
    w.block(format!("switch (_{owner}_state)"), |w| {
        for state in &machine.states {
            w.line(format!("case {}:", state_const(owner, &state.name)));
            w.indent();
            emit_first_satisfied_guard(w, owner, &state.transitions);
            w.line("break;");
            w.dedent();
        }
    });
}

/// Evaluates transitions in declaration order; only the first satisfied
/// guard takes effect, modelled as a chain of `if / else if`.
fn emit_first_satisfied_guard(w: &mut CWriter, owner: &str, transitions: &[crate::game::Transition]) {
    for (index, transition) in transitions.iter().enumerate() {
        let keyword = if index == 0 { "if" } else { "else if" };
        w.block(format!("{keyword} ({})", guard_c(&transition.guard)), |w| {
            w.line(format!("_{owner}_next = {};", state_const(owner, &transition.target)));
            w.line(format!("_{owner}_changed = 1;"));
        });
    }
}

fn guard_c(cond: &Condition) -> String {
    expr_c(&cond.0)
}

fn emit_exit_switch(w: &mut CWriter, owner: &str, machine: &crate::game::StateMachine) {
    w.block(format!("if (_{owner}_next != _{owner}_state)"), |w| {
        w.block(format!("switch (_{owner}_state)"), |w| {
            for state in &machine.states {
                w.line(format!("case {}:", state_const(owner, &state.name)));
                w.indent();
                for stmt in &state.on_exit {
                    stmt_c(w, stmt);
                }
                w.line("break;");
                w.dedent();
            }
        });
        w.line(format!("_{owner}_state = _{owner}_next;"));
    });
}
