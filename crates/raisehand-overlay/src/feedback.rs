//! Audio feedback for newly shown notifications.

use crate::classifier::ClassifiedEvent;

/// Named sounds the audio collaborator knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Shared cue for hand raises, chat messages and joins.
    HandRaise,
    /// Played when a participant leaves the call.
    Left,
}

impl SoundCue {
    pub fn for_event(event: &ClassifiedEvent) -> Self {
        match event {
            ClassifiedEvent::ParticipantLeft { .. } => SoundCue::Left,
            _ => SoundCue::HandRaise,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SoundCue::HandRaise => "hand-raise",
            SoundCue::Left => "left",
        }
    }
}

/// Errors that can occur while playing a sound.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// No audio output device could be opened.
    #[error("audio output is unavailable: {0}")]
    Unavailable(String),
    /// No sound is registered for the requested cue.
    #[error("no sound is registered for cue `{0}`")]
    MissingCue(&'static str),
    /// The sound data could not be read or decoded.
    #[error("failed to decode sound `{name}`: {reason}")]
    Decode { name: String, reason: String },
}

/// Audio collaborator.
pub trait SoundPlayer {
    /// Starts playing the sound registered for `cue`.
    fn play(&mut self, cue: SoundCue) -> Result<(), PlaybackError>;

    /// Plays the generic system alert sound.
    fn play_alert(&mut self) -> Result<(), PlaybackError>;
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for Box<P> {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlaybackError> {
        (**self).play(cue)
    }

    fn play_alert(&mut self) -> Result<(), PlaybackError> {
        (**self).play_alert()
    }
}

/// What the [`FeedbackPolicy`] ended up doing for a shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Muted,
    Played(SoundCue),
    /// The cue failed and the system alert was played instead.
    Alerted(SoundCue),
    /// Both the cue and the alert failed.
    Silent(SoundCue),
}

/// Chooses and plays the sound for every newly shown notification.
///
/// Audio failures never propagate: the notification is already on screen
/// when the policy runs.
#[derive(Debug, Clone, Default)]
pub struct FeedbackPolicy {
    muted: bool,
}

impl FeedbackPolicy {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Must only be called after a surface for `event` was created.
    pub fn on_accepted<P: SoundPlayer + ?Sized>(
        &self,
        event: &ClassifiedEvent,
        player: &mut P,
    ) -> Feedback {
        if self.muted {
            return Feedback::Muted;
        }

        let cue = SoundCue::for_event(event);
        let error = match player.play(cue) {
            Ok(()) => return Feedback::Played(cue),
            Err(e) => e,
        };

        log::warn!("Failed to play `{}` cue: {error}", cue.name());
        match player.play_alert() {
            Ok(()) => Feedback::Alerted(cue),
            Err(e) => {
                log::warn!("Failed to play the system alert: {e}");
                Feedback::Silent(cue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::RecordingPlayer;

    fn left() -> ClassifiedEvent {
        ClassifiedEvent::ParticipantLeft { count: 2 }
    }

    fn chat() -> ClassifiedEvent {
        ClassifiedEvent::ChatMessage {
            author: "Nikos".into(),
            body: "hi".into(),
        }
    }

    #[test]
    fn participant_left_selects_the_left_cue() {
        let mut player = RecordingPlayer::default();
        let policy = FeedbackPolicy::default();

        assert_eq!(policy.on_accepted(&left(), &mut player), Feedback::Played(SoundCue::Left));
        assert_eq!(
            policy.on_accepted(&chat(), &mut player),
            Feedback::Played(SoundCue::HandRaise)
        );
        assert_eq!(
            policy.on_accepted(&ClassifiedEvent::ParticipantJoined { count: 1 }, &mut player),
            Feedback::Played(SoundCue::HandRaise)
        );
        assert_eq!(
            player.played,
            vec![SoundCue::Left, SoundCue::HandRaise, SoundCue::HandRaise]
        );
    }

    #[test]
    fn failed_cue_falls_back_to_alert() {
        let mut player = RecordingPlayer {
            fail_cues: true,
            ..RecordingPlayer::default()
        };
        let policy = FeedbackPolicy::default();

        assert_eq!(policy.on_accepted(&left(), &mut player), Feedback::Alerted(SoundCue::Left));
        assert_eq!(player.alerts, 1);
    }

    #[test]
    fn failed_alert_is_swallowed() {
        let mut player = RecordingPlayer {
            fail_cues: true,
            fail_alert: true,
            ..RecordingPlayer::default()
        };
        let policy = FeedbackPolicy::default();

        assert_eq!(policy.on_accepted(&chat(), &mut player), Feedback::Silent(SoundCue::HandRaise));
    }

    #[test]
    fn muted_policy_never_touches_the_player() {
        let mut player = RecordingPlayer::default();
        let policy = FeedbackPolicy::new(true);

        assert_eq!(policy.on_accepted(&left(), &mut player), Feedback::Muted);
        assert!(player.played.is_empty());
        assert_eq!(player.alerts, 0);
    }
}
