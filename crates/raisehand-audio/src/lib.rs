//! Audio playback for notification cues.
//!
//! This crate implements the overlay engine's [`SoundPlayer`] on top of
//! `rodio`. Each cue either plays a user-provided sound file or, when none is
//! configured, a short synthesized chime. The generic alert used as the
//! fallback is always synthesized, so it does not depend on any file being
//! readable.
//!
//! [`SoundPlayer`]: raisehand_overlay::SoundPlayer

pub mod player;
pub mod tones;

/// Default playback volume in the `0.0..=1.0` range.
pub const DEFAULT_VOLUME: f32 = 0.6;

/// Scale applied to synthesized tones so they do not come out louder than
/// typical recorded notification sounds.
pub(crate) const TONE_GAIN: f32 = 0.3;
