//! Scene dispatch (`_scene_<name>_enter/_frame/_exit`) and the main loop,
//! which fixes the frame-order contract: input-buffer decrement → buttons
//! latch → scene frame → per-entity state update → physics update →
//! camera update → tween update → draw.

use crate::game::Game;

use super::ir_emit::stmt_c;
use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    for (index, name) in game.scenes.keys().enumerate() {
        w.line(format!("#define SCENE_{} {}", name.to_uppercase(), index));
    }
    if !game.scenes.is_empty() {
        w.blank();
    }

    w.line("static UINT8 _current_scene;");
    w.line("static UINT8 _pending_scene;");
    w.line("static UINT8 _scene_transition_pending;");
    w.blank();

    for (name, scene) in &game.scenes {
        w.block(format!("void _scene_{name}_enter(void)"), |w| {
            for stmt in &scene.on_enter {
                stmt_c(w, stmt);
            }
        });
        w.block(format!("void _scene_{name}_frame(void)"), |w| {
            for stmt in &scene.on_frame {
                stmt_c(w, stmt);
            }
        });
        w.block(format!("void _scene_{name}_exit(void)"), |w| {
            for stmt in &scene.on_exit {
                stmt_c(w, stmt);
            }
        });
        w.blank();
    }

    emit_dispatch(w, game);
    emit_main_loop(w, game);
}

fn emit_dispatch(w: &mut CWriter, game: &Game) {
    w.block("static void _scene_dispatch_frame(void)", |w| {
        w.block("switch (_current_scene)", |w| {
            for name in game.scenes.keys() {
                w.line(format!("case SCENE_{}:", name.to_uppercase()));
                w.indent();
                w.line(format!("_scene_{name}_frame();"));
                w.line("break;");
                w.dedent();
            }
        });
    });
    w.blank();

    w.block("static void _scene_dispatch_exit(void)", |w| {
        w.block("switch (_current_scene)", |w| {
            for name in game.scenes.keys() {
                w.line(format!("case SCENE_{}:", name.to_uppercase()));
                w.indent();
                w.line(format!("_scene_{name}_exit();"));
                w.line("break;");
                w.dedent();
            }
        });
    });
    w.blank();

    w.block("static void _scene_dispatch_enter(void)", |w| {
        w.block("switch (_current_scene)", |w| {
            for name in game.scenes.keys() {
                w.line(format!("case SCENE_{}:", name.to_uppercase()));
                w.indent();
                w.line(format!("_scene_{name}_enter();"));
                w.line("break;");
                w.dedent();
            }
        });
    });
    w.blank();
}

fn emit_main_loop(w: &mut CWriter, game: &Game) {
    w.block("void main(void)", |w| {
        if let Some(start) = &game.start_scene {
            w.line(format!("_current_scene = SCENE_{};", start.to_uppercase()));
        }
        w.line("_scene_dispatch_enter();");
        w.blank();
        w.block("while (1)", |w| {
            w.line("// input-buffer decrement");
            super::input_buffer::emit(w, game);
            w.line("_prev_joypad = _joypad;");
            w.line("_joypad = joypad();");
            w.blank();
            w.line("_scene_dispatch_frame();");
            for owner in game.state_machines.keys() {
                w.line(format!("{owner}_update();"));
            }
            if game.physics_world.is_some() || game.entities.iter().any(|e| e.physics.is_some()) {
                w.line("_physics_world_update();");
            }
            if game.camera.is_some() {
                w.line("_camera_update();");
            }
            if !game.music.is_empty() {
                w.line("_music_update();");
            }
            if !game.tweens.is_empty() {
                w.line("_tween_update();");
            }
            w.line("// draw");
            w.blank();
            w.block("if (_pending_scene != _current_scene)", |w| {
                w.line("_scene_dispatch_exit();");
                w.line("_current_scene = _pending_scene;");
                w.line("_scene_dispatch_enter();");
            });
            w.line("_frame_count++;");
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Scene;
    use crate::ir::Statement;

    #[test]
    fn scene_change_target_text_appears_in_output() {
        let mut game = Game::new("demo");
        let mut gameover = Scene::default();
        gameover.on_enter.push(Statement::DialogTick("none".into()));
        game.scenes.insert("gameover".into(), gameover);
        game.start_scene = Some("gameover".into());

        let mut w = CWriter::new();
        emit(&mut w, &game);
        assert!(w.finish().contains("gameover"));
    }
}
