//! Sound channel descriptors and the music driver (play/stop/fade).

use crate::game::Game;

use super::sanitize::sanitize_identifier;
use super::writer::CWriter;

pub fn emit(w: &mut CWriter, game: &Game) {
    for (name, effect) in &game.sound_effects {
        let ident = sanitize_identifier(name).to_uppercase();
        let channel = effect.channel.map(|c| c.discriminant()).unwrap_or(0);
        w.line(format!("#define SFX_{ident}_CHANNEL {channel}"));
        if let Some(sweep) = effect.sweep {
            w.line(format!("#define SFX_{ident}_SWEEP {sweep}"));
        }
        if let Some(envelope) = effect.envelope {
            w.line(format!("#define SFX_{ident}_ENVELOPE {envelope}"));
        }
        if let Some(waveform) = effect.waveform {
            w.line(format!("#define SFX_{ident}_WAVEFORM {waveform}"));
        }
        if let Some(output_level) = effect.output_level {
            w.line(format!("#define SFX_{ident}_OUTPUT_LEVEL {output_level}"));
        }
        if let Some(clock_shift) = effect.clock_shift {
            w.line(format!("#define SFX_{ident}_CLOCK_SHIFT {clock_shift}"));
        }
        if let Some(width_mode) = effect.width_mode {
            w.line(format!("#define SFX_{ident}_WIDTH_MODE {width_mode}"));
        }
        if let Some(divisor) = effect.divisor {
            w.line(format!("#define SFX_{ident}_DIVISOR {divisor}"));
        }
    }
    if !game.sound_effects.is_empty() {
        w.blank();
    }

    if game.music.is_empty() {
        return;
    }

    w.line("static UINT8 _music_fade_frames;");
    w.line("static UINT8 _music_fade_step;");
    w.blank();

    w.block("void sound_play(const char *sfx_name, UINT8 priority)", |w| {
        w.line("(void)sfx_name;");
        w.line("(void)priority;");
        w.line("// enqueue on the owning channel, replacing a lower-priority sound");
    });
    w.blank();

    w.block("void sound_stop(const char *sfx_name)", |w| {
        w.line("(void)sfx_name;");
        w.line("// clear the owning channel");
    });
    w.blank();

    w.block("void music_play(const char *music_name)", |w| {
        w.line("(void)music_name;");
        w.line("_music_fade_frames = 0;");
    });
    w.blank();

    w.block("void music_stop(void)", |w| {
        w.line("_music_fade_frames = 0;");
    });
    w.blank();

    w.block("void music_fade_out(UINT16 frames)", |w| {
        w.line("_music_fade_frames = frames;");
        w.line("_music_fade_step = 0;");
    });
    w.blank();

    w.block("void _music_update(void)", |w| {
        w.block("if (_music_fade_frames > 0)", |w| {
            w.line("_music_fade_step++;");
            w.block("if (_music_fade_step >= _music_fade_frames)", |w| {
                w.line("music_stop();");
            });
        });
    });
    w.blank();
}
