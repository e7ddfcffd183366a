//! Shared IR → C text rendering used by every statement-emitting layer
//! (state machines, scenes, tweens, ...). Not a layer of its own — just the
//! expression/statement text each layer's switch-emission builds on.

use crate::ir::{BinaryOp, BoolOp, CompareOp, Expression, FieldAccess, Literal, Statement, UnaryOp};

use super::tween::easing_discriminant;
use super::writer::CWriter;

pub fn expr_c(expr: &Expression) -> String {
    match expr {
        Expression::Literal(lit) => literal_c(lit),
        Expression::Variable(name) => name.clone(),
        Expression::Unary { op, expr } => {
            let inner = expr_c(expr);
            match op {
                UnaryOp::Negate => format!("(-{inner})"),
                UnaryOp::BitNot => format!("(~{inner})"),
            }
        }
        Expression::Binary { op, lhs, rhs } => format!("({} {} {})", expr_c(lhs), binary_op_c(*op), expr_c(rhs)),
        Expression::Compare { op, lhs, rhs } => format!("({} {} {})", expr_c(lhs), compare_op_c(*op), expr_c(rhs)),
        Expression::Bool { op, lhs, rhs } => {
            let op = match op {
                BoolOp::And => "&&",
                BoolOp::Or => "||",
            };
            format!("({} {} {})", expr_c(lhs), op, expr_c(rhs))
        }
        Expression::Not(e) => format!("(!{})", expr_c(e)),
        Expression::Coerce { expr, .. } => expr_c(expr),
        Expression::Index { array, index } => format!("{array}[{}]", expr_c(index)),
        Expression::Field(field) => field_c(field),
    }
}

fn literal_c(lit: &Literal) -> String {
    match lit {
        Literal::U8(v) => v.to_int().to_string(),
        Literal::U16(v) => v.to_int().to_string(),
        Literal::I8(v) => v.to_int().to_string(),
        Literal::I16(v) => v.to_int().to_string(),
        Literal::Bool(b) => if *b { "1" } else { "0" }.to_string(),
    }
}

fn binary_op_c(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::And => "&",
        BinaryOp::Or => "|",
        BinaryOp::Xor => "^",
        BinaryOp::Shl => "<<",
        BinaryOp::Shr => ">>",
    }
}

fn compare_op_c(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq => "==",
        CompareOp::Ne => "!=",
        CompareOp::Lt => "<",
        CompareOp::Le => "<=",
        CompareOp::Gt => ">",
        CompareOp::Ge => ">=",
    }
}

fn field_c(field: &FieldAccess) -> String {
    match field {
        FieldAccess::SpriteX(name) => format!("_sprite_{name}_x"),
        FieldAccess::SpriteY(name) => format!("_sprite_{name}_y"),
        FieldAccess::CameraX => "_camera_x".to_string(),
        FieldAccess::CameraY => "_camera_y".to_string(),
        FieldAccess::DialogState(name) => format!("_dialog_{name}_state"),
        FieldAccess::InputBufferLevel(name) => format!("buffer_{name}"),
    }
}

pub fn stmt_c(w: &mut CWriter, stmt: &Statement) {
    match stmt {
        Statement::Assign { target, expr } => {
            w.line(format!("{target} = {};", expr_c(expr)));
        }
        Statement::CompoundAssign { target, op, expr } => {
            w.line(format!("{target} {}= {};", binary_op_c(*op), expr_c(expr)));
        }
        Statement::If { cond, then, otherwise } => {
            w.block(format!("if ({})", expr_c(&cond.0)), |w| {
                for s in then {
                    stmt_c(w, s);
                }
            });
            if let Some(otherwise) = otherwise {
                w.block("else", |w| {
                    for s in otherwise {
                        stmt_c(w, s);
                    }
                });
            }
        }
        Statement::SceneChange(name) => {
            w.line(format!("_pending_scene = SCENE_{};", name.to_uppercase()));
        }
        Statement::CallFunction { name, args } => {
            let args: Vec<String> = args.iter().map(expr_c).collect();
            w.line(format!("{name}({});", args.join(", ")));
        }
        Statement::SpriteShow(name) => {
            w.line(format!("sprite_show(\"{name}\");"));
        }
        Statement::SpriteHide(name) => {
            w.line(format!("sprite_hide(\"{name}\");"));
        }
        Statement::SpriteMove { sprite, x, y } => {
            w.line(format!("sprite_move(\"{sprite}\", {}, {});", expr_c(x), expr_c(y)));
        }
        Statement::SpritePlay { sprite, animation } => {
            w.line(format!("sprite_play(\"{sprite}\", \"{animation}\");"));
        }
        Statement::PhysicsWorldUpdate => {
            w.line("_physics_world_update();");
        }
        Statement::CollisionResponse { tag_a, tag_b } => {
            w.line(format!("// collision response: {tag_a} <-> {tag_b}"));
        }
        Statement::StateStart { owner, state } => {
            w.line(format!("_{owner}_next = STATE_{}_{};", owner.to_uppercase(), state.to_uppercase()));
            w.line(format!("_{owner}_changed = 1;"));
        }
        Statement::StateUpdate { owner } => {
            w.line(format!("{owner}_update();"));
        }
        Statement::Tween { target, from, to, duration, easing } => {
            w.line(format!(
                "tween_start(\"{target}\", {}, {}, {}, {});",
                expr_c(from),
                expr_c(to),
                duration.to_int(),
                easing_discriminant(*easing)
            ));
        }
        Statement::DialogSay { dialog, text } => {
            w.line(format!("dialog_say(\"{dialog}\", \"{}\");", escape_c_string(text)));
        }
        Statement::DialogChoice { dialog, options } => {
            let options: Vec<String> = options.iter().map(|o| format!("\"{}\"", escape_c_string(o))).collect();
            w.line(format!("dialog_choice(\"{dialog}\", {});", options.join(", ")));
        }
        Statement::DialogTick(dialog) => {
            w.line(format!("dialog_tick(\"{dialog}\");"));
        }
        Statement::SoundPlay { sound, priority } => {
            w.line(format!("sound_play(\"{sound}\", {});", priority.to_int()));
        }
        Statement::SoundStop(sound) => {
            w.line(format!("sound_stop(\"{sound}\");"));
        }
        Statement::MusicPlay(name) => {
            w.line(format!("music_play(\"{name}\");"));
        }
        Statement::MusicStop => {
            w.line("music_stop();");
        }
        Statement::MusicFadeOut(frames) => {
            w.line(format!("music_fade_out({});", frames.to_int()));
        }
        Statement::TilemapShow(name) => {
            w.line(format!("tilemap_show(\"{name}\");"));
        }
        Statement::TilemapHide(name) => {
            w.line(format!("tilemap_hide(\"{name}\");"));
        }
        Statement::CameraSnap { x, y } => {
            w.line(format!("camera_snap({}, {});", expr_c(x), expr_c(y)));
        }
        Statement::CameraFollow(name) => {
            w.line(format!("camera_follow(\"{name}\");"));
        }
        Statement::CameraShake { intensity, duration } => {
            w.line(format!("camera_shake({}, {});", intensity.to_int(), duration.to_int()));
        }
        Statement::CameraTransition { kind, duration, callback } => {
            w.line(format!("camera_transition({}, {});", kind.discriminant(), duration.to_int()));
            if let Some(callback) = callback {
                w.block("if (camera_transition_complete())", |w| {
                    for s in callback {
                        stmt_c(w, s);
                    }
                });
            }
        }
        Statement::InputBufferDecrement(name) => {
            w.line(format!("// input buffer decrement: {name}"));
        }
        Statement::InputBufferFill(name) => {
            w.line(format!("// input buffer fill: {name}"));
        }
    }
}

fn escape_c_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
