use std::{collections::HashMap, path::PathBuf, time::Duration};

use raisehand_overlay::{Language, OverlaySettings, Size, SoundCue};
use serde::{Deserialize, Serialize};

/// Tuning of the notification overlay. Durations are in milliseconds and
/// distances in logical pixels.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Maximum number of toasts on screen at once.
    pub capacity: usize,
    /// Minimum spacing between two accepted page events.
    pub throttle_ms: u64,
    /// Window during which an identical toast text is suppressed.
    pub dedup_window_ms: u64,
    /// How long a toast stays fully visible.
    pub hold_ms: u64,
    /// Duration of the fade-in and fade-out animations.
    pub fade_ms: u64,
    /// Duration of the slide-up entrance animation.
    pub slide_ms: u64,
    /// Distance a new toast slides up from.
    pub slide_offset: f32,
    pub card_width: f32,
    pub card_height: f32,
    /// Vertical gap between stacked toasts.
    pub spacing: f32,
    /// Distance from the bottom-right corner of the screen.
    pub margin: f32,
}

impl OverlayConfig {
    /// Converts the persisted values into the engine's settings. A capacity
    /// of zero is treated as one.
    pub fn settings(&self) -> OverlaySettings {
        OverlaySettings {
            capacity: self.capacity.max(1),
            throttle: Duration::from_millis(self.throttle_ms),
            dedup_window: Duration::from_millis(self.dedup_window_ms),
            hold: Duration::from_millis(self.hold_ms),
            fade: Duration::from_millis(self.fade_ms),
            slide: Duration::from_millis(self.slide_ms),
            slide_offset: self.slide_offset,
            card_size: Size::new(self.card_width, self.card_height),
            spacing: self.spacing,
            margin: self.margin,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        let defaults = OverlaySettings::default();
        Self {
            capacity: defaults.capacity,
            throttle_ms: defaults.throttle.as_millis() as u64,
            dedup_window_ms: defaults.dedup_window.as_millis() as u64,
            hold_ms: defaults.hold.as_millis() as u64,
            fade_ms: defaults.fade.as_millis() as u64,
            slide_ms: defaults.slide.as_millis() as u64,
            slide_offset: defaults.slide_offset,
            card_width: defaults.card_size.width,
            card_height: defaults.card_size.height,
            spacing: defaults.spacing,
            margin: defaults.margin,
        }
    }
}

/// Notification sounds. Cues without a file play a built-in chime.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SoundsConfig {
    /// Sound file played when a student raises their hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_raise: Option<PathBuf>,
    /// Sound file played when a participant leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<PathBuf>,
    /// Playback volume in the `0.0..=1.0` range.
    pub volume: f32,
}

impl SoundsConfig {
    /// Configured files keyed by the cue they replace.
    pub fn cue_files(&self) -> HashMap<SoundCue, PathBuf> {
        [
            (SoundCue::HandRaise, &self.hand_raise),
            (SoundCue::Left, &self.left),
        ]
        .into_iter()
        .filter_map(|(cue, path)| path.clone().map(|path| (cue, path)))
        .collect()
    }

    pub fn volume(&self) -> f32 {
        self.volume.clamp(0.0, 1.0)
    }
}

impl Default for SoundsConfig {
    fn default() -> Self {
        Self {
            hand_raise: None,
            left: None,
            volume: 0.6,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Whether notification sounds are suppressed.
    pub muted: bool,
    /// Language of the hosted page and of generated toast texts.
    pub language: Language,
    /// Configuration of the notification overlay.
    pub overlay: OverlayConfig,
    /// Sound files and volume of the audio cues.
    pub sounds: SoundsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_engine_defaults() {
        assert_eq!(Config::default().overlay.settings(), OverlaySettings::default());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            muted = true
            language = "el"

            [overlay]
            capacity = 3
            "#,
        )
        .expect("partial config should parse");

        assert!(config.muted);
        assert_eq!(config.language, Language::Greek);
        assert_eq!(config.overlay.capacity, 3);
        assert_eq!(config.overlay.hold_ms, 5000);
    }

    #[test]
    fn config_survives_toml_round_trip() {
        let config = Config {
            muted: true,
            language: Language::Greek,
            overlay: OverlayConfig {
                capacity: 4,
                ..OverlayConfig::default()
            },
            sounds: SoundsConfig {
                left: Some(PathBuf::from("/home/teacher/sounds/left.mp3")),
                ..SoundsConfig::default()
            },
        };

        let text = toml::to_string_pretty(&config).expect("config should serialize");
        assert!(text.contains("language = \"greek\""));
        let parsed: Config = toml::from_str(&text).expect("config should parse back");
        assert_eq!(parsed, config);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let overlay = OverlayConfig {
            capacity: 0,
            ..OverlayConfig::default()
        };
        assert_eq!(overlay.settings().capacity, 1);
    }

    #[test]
    fn sound_files_are_keyed_by_cue() {
        let config: Config = toml::from_str(
            r#"
            [sounds]
            hand_raise = "/home/teacher/sounds/hand.mp3"
            volume = 1.5
            "#,
        )
        .expect("sounds table should parse");

        assert_eq!(
            config.sounds.cue_files(),
            HashMap::from([(
                SoundCue::HandRaise,
                PathBuf::from("/home/teacher/sounds/hand.mp3")
            )])
        );
        assert_eq!(config.sounds.volume(), 1.0);
    }

    #[test]
    fn default_sounds_use_the_built_in_chimes() {
        let sounds = SoundsConfig::default();
        assert!(sounds.cue_files().is_empty());
        assert_eq!(sounds.volume(), 0.6);
    }
}
