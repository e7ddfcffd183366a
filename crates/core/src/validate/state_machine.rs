//! State machine shape: non-empty, transitions target declared states, and
//! reachability from the start state.

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::Game;

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (owner, machine) in &game.state_machines {
        if machine.states.is_empty() {
            result.errors.push(
                Diag::new(DiagCategory::StateMachine, format!("state machine {owner:?} has no states"))
                    .at(owner.clone()),
            );
            continue;
        }

        for state in &machine.states {
            for transition in &state.transitions {
                if machine.state(&transition.target).is_none() {
                    result.errors.push(
                        Diag::new(
                            DiagCategory::StateMachine,
                            format!(
                                "state machine {owner:?} transition from {:?} targets undeclared state {:?}",
                                state.name, transition.target
                            ),
                        )
                        .at(owner.clone()),
                    );
                }
            }
        }

        let reachable = machine.reachable_states();
        for state in &machine.states {
            if !reachable.contains(state.name.as_str()) {
                result.warnings.push(
                    Diag::new(
                        DiagCategory::StateMachine,
                        format!("state {:?} in machine {owner:?} is unreachable", state.name),
                    )
                    .at(owner.clone()),
                );
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{State, StateMachine};
    use crate::ir::{Condition, Expression};

    fn transition(target: &str) -> crate::game::Transition {
        crate::game::Transition { guard: Condition::new(Expression::u8(1)), target: target.into() }
    }

    #[test]
    fn empty_machine_errors() {
        let mut game = Game::new("demo");
        game.state_machines.insert("player".into(), StateMachine::default());
        let result = check(&game);
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].category, DiagCategory::StateMachine);
    }

    #[test]
    fn unreachable_state_warns() {
        let mut machine = StateMachine::default();
        machine.states.push(State::new("idle"));
        machine.states.push(State::new("orphan"));
        machine.start_state = Some("idle".into());
        let mut game = Game::new("demo");
        game.state_machines.insert("player".into(), machine);
        let result = check(&game);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|d| d.message.contains("orphan")));
    }

    #[test]
    fn transition_to_undeclared_state_errors() {
        let mut machine = StateMachine::default();
        machine.states.push(State { transitions: vec![transition("missing")], ..State::new("idle") });
        machine.start_state = Some("idle".into());
        let mut game = Game::new("demo");
        game.state_machines.insert("player".into(), machine);
        let result = check(&game);
        assert!(!result.is_valid());
    }
}
