//! The tween driver: active tweens keep a phase counter and write their
//! eased value into the target variable each tick.

use crate::game::Game;
use crate::ir::Easing;

use super::sanitize::sanitize_identifier;
use super::writer::CWriter;

const ACTIVE_TWEEN_SLOTS: usize = 4;

pub fn emit(w: &mut CWriter, game: &Game) {
    if game.tweens.is_empty() {
        return;
    }

    for tween in game.tweens.values() {
        let ident = sanitize_identifier(&tween.name).to_uppercase();
        w.line(format!("#define TWEEN_{ident}_FROM {}", tween.from));
        w.line(format!("#define TWEEN_{ident}_TO {}", tween.to));
    }
    w.blank();

    w.line(format!(
        "static struct {{ const char *target; INT16 from; INT16 to; UINT16 duration; UINT16 phase; UINT8 easing; UINT8 active; }} _tween_slots[{ACTIVE_TWEEN_SLOTS}];"
    ));
    w.blank();

    w.block(
        "void tween_start(const char *target, INT16 from, INT16 to, UINT16 duration, UINT8 easing)",
        |w| {
            w.block(format!("for (UINT8 i = 0; i < {ACTIVE_TWEEN_SLOTS}; i++)"), |w| {
                w.block("if (!_tween_slots[i].active)", |w| {
                    w.line("_tween_slots[i].target = target;");
                    w.line("_tween_slots[i].from = from;");
                    w.line("_tween_slots[i].to = to;");
                    w.line("_tween_slots[i].duration = duration;");
                    w.line("_tween_slots[i].phase = 0;");
                    w.line("_tween_slots[i].easing = easing;");
                    w.line("_tween_slots[i].active = 1;");
                    w.line("return;");
                });
            });
        },
    );
    w.blank();

    w.block(format!("static INT16 _tween_ease(UINT8 easing, INT16 from, INT16 to, UINT16 phase, UINT16 duration)"), |w| {
        w.line("INT16 delta = to - from;");
        w.block("switch (easing)", |w| {
            w.line(format!("case {}:", easing_discriminant(Easing::EaseIn)));
            w.indent();
            w.line("return from + (INT16)(((INT32)delta * phase * phase) / ((INT32)duration * duration));");
            w.dedent();
            w.line(format!("case {}:", easing_discriminant(Easing::EaseOut)));
            w.indent();
            w.line("return to - (INT16)(((INT32)delta * (duration - phase) * (duration - phase)) / ((INT32)duration * duration));");
            w.dedent();
            w.line(format!("case {}:", easing_discriminant(Easing::EaseInOut)));
            w.indent();
            w.line("return from + (INT16)(((INT32)delta * phase) / duration);");
            w.dedent();
            w.line("default:");
            w.indent();
            w.line("return from + (INT16)(((INT32)delta * phase) / duration);");
            w.dedent();
        });
    });
    w.blank();

    w.block("void _tween_update(void)", |w| {
        w.block(format!("for (UINT8 i = 0; i < {ACTIVE_TWEEN_SLOTS}; i++)"), |w| {
            w.block("if (_tween_slots[i].active)", |w| {
                w.line("_tween_slots[i].phase++;");
                w.line("INT16 _tween_value = _tween_ease(_tween_slots[i].easing, _tween_slots[i].from, _tween_slots[i].to, _tween_slots[i].phase, _tween_slots[i].duration);");
                let mut targets: Vec<&str> = game.tweens.values().map(|t| t.target.as_str()).collect();
                targets.sort_unstable();
                targets.dedup();
                for target in targets {
                    w.line(format!(
                        "if (!strcmp(_tween_slots[i].target, \"{target}\")) {target} = _tween_value;"
                    ));
                }
                w.block("if (_tween_slots[i].phase >= _tween_slots[i].duration)", |w| {
                    w.line("_tween_slots[i].active = 0;");
                });
            });
        });
    });
    w.blank();
}

pub(crate) fn easing_discriminant(easing: Easing) -> u8 {
    match easing {
        Easing::Linear => 0,
        Easing::EaseIn => 1,
        Easing::EaseOut => 2,
        Easing::EaseInOut => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tween;
    use crate::value::U16;

    #[test]
    fn emits_nothing_without_tweens() {
        let game = Game::new("demo");
        let mut w = CWriter::new();
        emit(&mut w, &game);
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn emits_a_slot_table_and_start_function() {
        let mut game = Game::new("demo");
        game.tweens.insert(
            "fade".into(),
            Tween { name: "fade".into(), target: "alpha".into(), from: 0, to: 255, duration: U16::new(30), easing: Easing::Linear },
        );
        let mut w = CWriter::new();
        emit(&mut w, &game);
        let output = w.finish();
        assert!(output.contains("_tween_slots"));
        assert!(output.contains("void tween_start"));
    }

    #[test]
    fn update_writes_the_eased_value_into_its_target() {
        let mut game = Game::new("demo");
        game.tweens.insert(
            "fade".into(),
            Tween { name: "fade".into(), target: "alpha".into(), from: 0, to: 255, duration: U16::new(30), easing: Easing::Linear },
        );
        let mut w = CWriter::new();
        emit(&mut w, &game);
        let output = w.finish();
        assert!(output.contains("_tween_ease(_tween_slots[i].easing"));
        assert!(output.contains("if (!strcmp(_tween_slots[i].target, \"alpha\")) alpha = _tween_value;"));
    }
}
