//! Shallow tree walkers shared by the validator and the code generator.
//!
//! Both C5 and C7 need to find every variable reference or every nested
//! statement inside an IR tree without re-writing the same exhaustive match
//! three times. These free functions do the walking; callers supply a
//! closure for the part that's actually domain-specific.

use crate::ir::expr::{Expression, FieldAccess};
use crate::ir::stmt::Statement;

/// Call `f` once for every `Expression` node in `expr`, including `expr`
/// itself, pre-order.
pub fn walk_expression<'a, F: FnMut(&'a Expression)>(expr: &'a Expression, f: &mut F) {
    f(expr);
    match expr {
        Expression::Literal(_) | Expression::Variable(_) | Expression::Field(_) => {}
        Expression::Unary { expr, .. } => walk_expression(expr, f),
        Expression::Binary { lhs, rhs, .. }
        | Expression::Compare { lhs, rhs, .. }
        | Expression::Bool { lhs, rhs, .. } => {
            walk_expression(lhs, f);
            walk_expression(rhs, f);
        }
        Expression::Not(e) => walk_expression(e, f),
        Expression::Coerce { expr, .. } => walk_expression(expr, f),
        Expression::Index { index, .. } => walk_expression(index, f),
    }
}

/// Call `f` once for every `Statement` node in `stmt`, including `stmt`
/// itself and nested blocks (`If` branches, transition callbacks),
/// pre-order.
pub fn walk_statement<F: FnMut(&Statement)>(stmt: &Statement, f: &mut F) {
    f(stmt);
    match stmt {
        Statement::If { then, otherwise, .. } => {
            for s in then {
                walk_statement(s, f);
            }
            if let Some(otherwise) = otherwise {
                for s in otherwise {
                    walk_statement(s, f);
                }
            }
        }
        Statement::CameraTransition { callback: Some(callback), .. } => {
            for s in callback {
                walk_statement(s, f);
            }
        }
        _ => {}
    }
}

/// Every plain-variable name referenced anywhere inside `expr` (array
/// indices, arithmetic operands, comparisons — not sprite/camera/dialog
/// field reads, which are not backed by a `GBVar`).
pub fn variable_names_in(expr: &Expression) -> Vec<&str> {
    let mut names = Vec::new();
    walk_expression(expr, &mut |node| {
        if let Expression::Variable(name) = node {
            names.push(name.as_str());
        }
    });
    names
}

/// The array name an `Index` expression indexes into, if any are nested in
/// `expr` (there is at most one in practice, but the IR does not forbid
/// `arr[other_arr[0]]`, so this returns every one found).
pub fn indexed_arrays_in(expr: &Expression) -> Vec<&str> {
    let mut arrays = Vec::new();
    walk_expression(expr, &mut |node| {
        if let Expression::Index { array, .. } = node {
            arrays.push(array.as_str());
        }
    });
    arrays
}

/// Every field access (sprite/camera/dialog/input-buffer reads) anywhere
/// inside `expr`.
pub fn field_accesses_in(expr: &Expression) -> Vec<&FieldAccess> {
    let mut fields = Vec::new();
    walk_expression(expr, &mut |node| {
        if let Expression::Field(field) = node {
            fields.push(field);
        }
    });
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::expr::{BinaryOp, Expression};

    #[test]
    fn collects_nested_variable_names() {
        let expr = Expression::binary(
            BinaryOp::Add,
            Expression::var("a"),
            Expression::binary(BinaryOp::Mul, Expression::var("b"), Expression::u8(2)),
        );
        assert_eq!(variable_names_in(&expr), vec!["a", "b"]);
    }

    #[test]
    fn collects_indexed_arrays() {
        let expr = Expression::Index {
            array: "inventory".into(),
            index: Box::new(Expression::var("slot")),
        };
        assert_eq!(indexed_arrays_in(&expr), vec!["inventory"]);
    }

    #[test]
    fn walk_statement_descends_into_if_branches() {
        let stmt = Statement::If {
            cond: crate::ir::expr::Condition::new(Expression::u8(1)),
            then: vec![Statement::SceneChange("town".into())],
            otherwise: Some(vec![Statement::SceneChange("dungeon".into())]),
        };
        let mut seen = Vec::new();
        walk_statement(&stmt, &mut |s| {
            if let Statement::SceneChange(name) = s {
                seen.push(name.clone());
            }
        });
        assert_eq!(seen, vec!["town".to_string(), "dungeon".to_string()]);
    }
}
