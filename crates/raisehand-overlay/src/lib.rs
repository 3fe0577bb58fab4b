//! Live notification overlay engine.
//!
//! This crate turns the noisy signals scraped out of the hosted classroom
//! page (hand-raise snackbars, chat messages, participant counts) into a
//! bounded, animated stack of on-screen toasts with matching audio cues.
//!
//! The engine is single-threaded and owns no timers of its own: every
//! surface stores the deadline of its next transition, and the host loop
//! calls [`NotificationPipeline::advance`] whenever one is due. Windowing
//! and sound are reached through the [`SurfaceHost`] and [`SoundPlayer`]
//! traits so the crate stays free of UI and audio dependencies.

pub mod classifier;
pub mod feedback;
pub mod filter;
pub mod host;
pub mod locale;
pub mod pipeline;
pub mod render;
pub mod stack;
pub mod surface;

#[cfg(test)]
mod tests;

use std::time::Duration;

pub use classifier::{ClassifiedEvent, RawMessage};
pub use feedback::{Feedback, FeedbackPolicy, PlaybackError, SoundCue, SoundPlayer};
pub use filter::{DedupFilter, Verdict};
pub use host::{HostError, Point, Rect, Size, SurfaceContent, SurfaceHost, SurfaceId};
pub use locale::Language;
pub use pipeline::{NotificationPipeline, Outcome};
pub use stack::{OverlayStack, StackError};
pub use surface::{NotificationSurface, SurfaceState};

/// Maximum number of toasts visible at the same time.
pub const DEFAULT_CAPACITY: usize = 5;

/// Minimum spacing between two events passing the global throttle.
///
/// A single change in the page usually fires a burst of DOM mutations, each
/// of which is reported as its own message.
pub const THROTTLE_MILLISECONDS: u64 = 120;

/// How long an identical notification text stays suppressed after it was
/// shown.
pub const DEDUP_WINDOW_MILLISECONDS: u64 = 5000;

/// How long a toast stays fully visible before it starts fading out.
pub const HOLD_MILLISECONDS: u64 = 5000;

/// Duration of both the fade-in and the fade-out opacity animations.
pub const FADE_MILLISECONDS: u64 = 200;

/// Duration of the slide-up animation of a newly admitted toast.
pub const SLIDE_MILLISECONDS: u64 = 220;

/// Tunables of the overlay engine. The defaults match the constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    /// Maximum number of surfaces kept in the stack.
    pub capacity: usize,
    /// Global micro-throttle interval.
    pub throttle: Duration,
    /// Per-text suppression window.
    pub dedup_window: Duration,
    /// Time a surface holds at full opacity.
    pub hold: Duration,
    /// Duration of a single opacity animation.
    pub fade: Duration,
    /// Duration of the slide-up entrance of the newest surface.
    pub slide: Duration,
    /// Distance below its resting position a new surface starts sliding from.
    pub slide_offset: f32,
    /// Size of a single notification card.
    pub card_size: Size,
    /// Vertical gap between two stacked cards.
    pub spacing: f32,
    /// Distance between the stack and the bottom-right corner of the work
    /// area.
    pub margin: f32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            throttle: Duration::from_millis(THROTTLE_MILLISECONDS),
            dedup_window: Duration::from_millis(DEDUP_WINDOW_MILLISECONDS),
            hold: Duration::from_millis(HOLD_MILLISECONDS),
            fade: Duration::from_millis(FADE_MILLISECONDS),
            slide: Duration::from_millis(SLIDE_MILLISECONDS),
            slide_offset: 24.0,
            card_size: Size::new(360.0, 96.0),
            spacing: 10.0,
            margin: 16.0,
        }
    }
}
