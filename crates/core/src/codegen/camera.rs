//! Camera state storage and the transition driver. `camera_transition`
//! records a transition kind and starts a progress counter;
//! `camera_transition_complete` reports when it has run out.

use crate::game::Game;

use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    if game.camera.is_none() {
        return;
    }

    w.line("static INT16 _camera_x;");
    w.line("static INT16 _camera_y;");
    w.line("static UINT8 _camera_transition_kind;");
    w.line("static UINT8 _camera_transition_duration;");
    w.line("static UINT8 _camera_transition_progress;");
    w.blank();

    w.block("void camera_snap(INT16 x, INT16 y)", |w| {
        w.line("_camera_x = x;");
        w.line("_camera_y = y;");
    });
    w.blank();

    w.block("void camera_follow(const char *entity_name)", |w| {
        w.line("// follow is resolved against the entity's position each tick");
        w.line("(void)entity_name;");
    });
    w.blank();

    w.block("void camera_shake(UINT8 intensity, UINT8 duration)", |w| {
        w.line("(void)intensity;");
        w.line("(void)duration;");
    });
    w.blank();

    w.block("void camera_transition(UINT8 kind, UINT8 duration)", |w| {
        w.line("_camera_transition_kind = kind;");
        w.line("_camera_transition_duration = duration;");
        w.line("_camera_transition_progress = 0;");
    });
    w.blank();

    w.block("UINT8 camera_transition_complete(void)", |w| {
        w.line("return _camera_transition_kind != 0 && _camera_transition_progress >= _camera_transition_duration;");
    });
    w.blank();

    w.block("void _camera_update(void)", |w| {
        w.block("if (_camera_transition_kind != 0)", |w| {
            w.block("if (_camera_transition_progress < _camera_transition_duration)", |w| {
                w.line("_camera_transition_progress++;");
            });
            w.block("if (_camera_transition_progress >= _camera_transition_duration)", |w| {
                w.line("_camera_transition_kind = 0;");
            });
        });
    });
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Camera;

    #[test]
    fn emits_nothing_without_a_camera() {
        let game = Game::new("demo");
        let mut w = CWriter::new();
        emit(&mut w, &game);
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn emits_transition_driver_when_camera_present() {
        let mut game = Game::new("demo");
        game.camera = Some(Camera::default());
        let mut w = CWriter::new();
        emit(&mut w, &game);
        let output = w.finish();
        assert!(output.contains("camera_transition_complete"));
        assert!(output.contains("_camera_transition_kind != 0 && _camera_transition_progress >= _camera_transition_duration"));
    }
}
