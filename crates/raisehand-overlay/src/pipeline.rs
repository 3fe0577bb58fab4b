//! The owned notification session tying the engine together.

use std::time::Instant;

use crate::{
    OverlaySettings,
    classifier::{self, ClassifiedEvent},
    feedback::{Feedback, FeedbackPolicy, SoundPlayer},
    filter::{DedupFilter, Verdict},
    host::{SurfaceHost, SurfaceId},
    locale::Language,
    render,
    stack::OverlayStack,
};

/// Result of feeding one message through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new surface is on screen.
    Shown {
        id: SurfaceId,
        text: String,
        feedback: Feedback,
    },
    /// The filter dropped the event. Nothing visible or audible happened.
    Suppressed { verdict: Verdict, text: String },
    /// The message was not a notification the pipeline knows about.
    Ignored { raw: String },
    /// The surface could not be created.
    Failed { text: String, reason: String },
}

impl Outcome {
    pub fn is_shown(&self) -> bool {
        matches!(self, Outcome::Shown { .. })
    }

    /// Status line to show in the shell for this outcome, if any.
    pub fn status_text(&self) -> Option<String> {
        match self {
            Outcome::Shown { text, .. } => {
                let headline = text.lines().next().unwrap_or_default();
                Some(format!("Notification: {headline}"))
            }
            Outcome::Suppressed { .. } => None,
            Outcome::Ignored { .. } => Some("Received an unrecognized page event.".to_owned()),
            Outcome::Failed { reason, .. } => {
                Some(format!("Could not show notification: {reason}"))
            }
        }
    }
}

/// Single owner of all notification state of a shell window: the dedup
/// history, the overlay stack, the mute flag and the collaborators.
///
/// Every method must be called from the thread that drives the UI.
pub struct NotificationPipeline<H, P> {
    language: Language,
    filter: DedupFilter,
    stack: OverlayStack,
    feedback: FeedbackPolicy,
    host: H,
    player: P,
}

impl<H: SurfaceHost, P: SoundPlayer> NotificationPipeline<H, P> {
    pub fn new(
        settings: OverlaySettings,
        language: Language,
        muted: bool,
        host: H,
        player: P,
    ) -> Self {
        Self {
            language,
            filter: DedupFilter::new(settings.throttle, settings.dedup_window),
            stack: OverlayStack::new(settings),
            feedback: FeedbackPolicy::new(muted),
            host,
            player,
        }
    }

    /// Feeds the JSON text of one browser message through the pipeline.
    pub fn handle_json(&mut self, payload: &str, now: Instant) -> Outcome {
        let event = classifier::classify_json(payload, self.language);
        self.handle_event(event, now)
    }

    /// Feeds an already classified event through the pipeline.
    pub fn handle_event(&mut self, event: ClassifiedEvent, now: Instant) -> Outcome {
        let Some(content) = render::render(&event, self.language) else {
            let raw = match event {
                ClassifiedEvent::Unrecognized { raw } => raw,
                _ => String::new(),
            };
            log::debug!("Ignoring unrecognized page event: {raw}");
            return Outcome::Ignored { raw };
        };

        let verdict = self.filter.accept(&content.text, now);
        if verdict != Verdict::Accepted {
            log::debug!("Suppressed {} ({verdict:?})", event.kind_name());
            return Outcome::Suppressed {
                verdict,
                text: content.text,
            };
        }

        let text = content.text.clone();
        match self.stack.admit(content, now, &mut self.host) {
            Ok(id) => {
                let feedback = self.feedback.on_accepted(&event, &mut self.player);
                log::info!("Showing {} as surface {id}", event.kind_name());
                Outcome::Shown { id, text, feedback }
            }
            Err(e) => {
                log::warn!("Dropping {} notification: {e}", event.kind_name());
                self.filter.forget(&text);
                Outcome::Failed {
                    text,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Runs every lifecycle transition due at `now`.
    pub fn advance(&mut self, now: Instant) -> Vec<SurfaceId> {
        self.stack.advance(now, &mut self.host)
    }

    /// Handles a close request coming from the surface itself.
    pub fn dismiss(&mut self, id: SurfaceId, now: Instant) -> bool {
        self.stack.dismiss(id, now, &mut self.host)
    }

    /// When [`advance`](Self::advance) has to be called next, if at all.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.stack.next_deadline()
    }

    /// Closes every surface without animation.
    pub fn close_all(&mut self) {
        self.stack.close_all(&mut self.host);
    }

    pub fn is_muted(&self) -> bool {
        self.feedback.is_muted()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.feedback.set_muted(muted);
    }

    /// Applies new tunables. Surfaces already on screen keep their running
    /// animations and move to the new geometry on the next relayout.
    pub fn reconfigure(&mut self, settings: OverlaySettings) {
        self.filter.set_timing(settings.throttle, settings.dedup_window);
        self.stack.set_settings(settings);
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn stack(&self) -> &OverlayStack {
        &self.stack
    }

    pub fn filter(&self) -> &DedupFilter {
        &self.filter
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }
}
