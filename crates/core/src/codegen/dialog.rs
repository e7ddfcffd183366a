//! Dialog runtime: a queue of pending lines plus a choice descriptor and
//! the `_selected` index the player lands on.

use crate::game::Game;

use super::sanitize::sanitize_identifier;
use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    if game.dialogs.is_empty() {
        return;
    }

    for dialog in game.dialogs.values() {
        let ident = sanitize_identifier(&dialog.name);
        for (index, line) in dialog.lines.iter().enumerate() {
            w.line(format!(
                "static const char DIALOG_{}_{}[] = \"{}\";",
                ident.to_uppercase(),
                index,
                line.replace('\\', "\\\\").replace('"', "\\\"")
            ));
        }
    }
    w.blank();

    w.line("static UINT8 _dialog_active;");
    w.line("static UINT8 _dialog_selected;");
    w.blank();

    w.block("void dialog_say(const char *dialog_name, const char *text)", |w| {
        w.line("(void)dialog_name;");
        w.line("_dialog_active = 1;");
        w.line("// push text onto the on-screen text box");
        w.line("(void)text;");
    });
    w.blank();

    w.block("void dialog_choice(const char *dialog_name, ...)", |w| {
        w.line("(void)dialog_name;");
        w.line("_dialog_active = 1;");
        w.line("_dialog_selected = 0;");
    });
    w.blank();

    w.block("void dialog_tick(const char *dialog_name)", |w| {
        w.line("(void)dialog_name;");
        w.block("if (!_dialog_active)", |w| {
            w.line("return;");
        });
        w.line("// advance text box / handle selection input");
    });
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Dialog;

    #[test]
    fn emits_nothing_without_dialogs() {
        let game = Game::new("demo");
        let mut w = CWriter::new();
        emit(&mut w, &game);
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn emits_a_static_string_per_line() {
        let mut game = Game::new("demo");
        let mut dialog = Dialog::new("intro");
        dialog.lines.push("Hello!".into());
        game.dialogs.insert("intro".into(), dialog);
        let mut w = CWriter::new();
        emit(&mut w, &game);
        let output = w.finish();
        assert!(output.contains("DIALOG_INTRO_0"));
        assert!(output.contains("Hello!"));
    }
}
