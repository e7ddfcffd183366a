//! Runtime-index array bounds: literal indices are already range-checked at
//! build time (see [`crate::builder`]); this check folds simple constant
//! arithmetic on a surviving index expression and range-checks the result.

use super::{Diag, DiagCategory, ValidationResult};
use crate::game::Game;
use crate::ir::visit::walk_statement;
use crate::ir::{BinaryOp, Expression, Literal, Statement};

pub fn check(game: &Game) -> ValidationResult {
    let mut result = ValidationResult::default();

    for scene in game.scenes.values() {
        for stmt in scene.on_enter.iter().chain(&scene.on_exit).chain(&scene.on_frame) {
            walk_statement(stmt, &mut |s| check_statement(game, s, &mut result));
        }
    }
    for machine in game.state_machines.values() {
        for state in &machine.states {
            for stmt in state.on_enter.iter().chain(&state.on_exit).chain(&state.on_tick) {
                walk_statement(stmt, &mut |s| check_statement(game, s, &mut result));
            }
            for transition in &state.transitions {
                check_expression(game, &transition.guard.0, &mut result);
            }
        }
    }

    result
}

fn check_statement(game: &Game, stmt: &Statement, result: &mut ValidationResult) {
    match stmt {
        Statement::Assign { expr, .. } | Statement::CompoundAssign { expr, .. } => {
            check_expression(game, expr, result)
        }
        Statement::If { cond, .. } => check_expression(game, &cond.0, result),
        Statement::CallFunction { args, .. } => {
            for arg in args {
                check_expression(game, arg, result);
            }
        }
        Statement::SpriteMove { x, y, .. } | Statement::CameraSnap { x, y } => {
            check_expression(game, x, result);
            check_expression(game, y, result);
        }
        _ => {}
    }
}

fn check_expression(game: &Game, expr: &Expression, result: &mut ValidationResult) {
    crate::ir::visit::walk_expression(expr, &mut |node| {
        if let Expression::Index { array, index } = node {
            let Some(len) = game.lookup_variable(array).and_then(|v| v.ty.array_len()) else { return };
            if let Some(value) = fold_constant(index) {
                if value < 0 || value as usize >= len {
                    result.errors.push(Diag::new(
                        DiagCategory::ArrayBounds,
                        format!("index {value} out of bounds for array {array:?} of length {len}"),
                    ));
                }
            }
        }
    });
}

/// Folds an expression built entirely from literals and `+ - *`, returning
/// `None` as soon as it hits a variable or any other operator — those
/// indices cannot be range-checked without running the program.
fn fold_constant(expr: &Expression) -> Option<i64> {
    match expr {
        Expression::Literal(Literal::U8(v)) => Some(v.to_int()),
        Expression::Literal(Literal::U16(v)) => Some(v.to_int()),
        Expression::Literal(Literal::I8(v)) => Some(v.to_int()),
        Expression::Literal(Literal::I16(v)) => Some(v.to_int()),
        Expression::Binary { op: BinaryOp::Add, lhs, rhs } => Some(fold_constant(lhs)? + fold_constant(rhs)?),
        Expression::Binary { op: BinaryOp::Sub, lhs, rhs } => Some(fold_constant(lhs)? - fold_constant(rhs)?),
        Expression::Binary { op: BinaryOp::Mul, lhs, rhs } => Some(fold_constant(lhs)? * fold_constant(rhs)?),
        _ => None,
    }
}
