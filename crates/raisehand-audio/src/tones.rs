use std::time::Duration;

use raisehand_overlay::SoundCue;

/// A single sine tone in a synthesized chime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: Duration,
}

const fn tone(frequency: f32, milliseconds: u64) -> Tone {
    Tone {
        frequency,
        duration: Duration::from_millis(milliseconds),
    }
}

/// Rising two-note chime for hand raises, chat messages and joins.
const HAND_RAISE: [Tone; 2] = [tone(880.0, 90), tone(1318.5, 140)];

/// Falling two-note chime for participants leaving.
const LEFT: [Tone; 2] = [tone(659.3, 90), tone(440.0, 160)];

/// Plain beep used as the generic alert.
const ALERT: [Tone; 1] = [tone(800.0, 100)];

/// Tones played for `cue` when no sound file is configured.
pub fn chime(cue: SoundCue) -> &'static [Tone] {
    match cue {
        SoundCue::HandRaise => &HAND_RAISE,
        SoundCue::Left => &LEFT,
    }
}

pub fn alert() -> &'static [Tone] {
    &ALERT
}
