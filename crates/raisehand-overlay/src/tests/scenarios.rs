use std::time::{Duration, Instant};

use super::{RecordingHost, RecordingPlayer};
use crate::{
    Feedback, Language, NotificationPipeline, OverlaySettings, Outcome, SoundCue, SurfaceState,
    Verdict,
};

type TestPipeline = NotificationPipeline<RecordingHost, RecordingPlayer>;

fn pipeline(muted: bool) -> TestPipeline {
    NotificationPipeline::new(
        OverlaySettings::default(),
        Language::English,
        muted,
        RecordingHost::default(),
        RecordingPlayer::default(),
    )
}

fn at(base: Instant, milliseconds: u64) -> Instant {
    base + Duration::from_millis(milliseconds)
}

const MARIA: &str = r#"{"type":"handSnackbar","text":"Maria raised their hand."}"#;

#[test]
fn repeated_hand_raise_within_a_second_is_shown_once() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    assert!(pipeline.handle_json(MARIA, base).is_shown());
    let second = pipeline.handle_json(MARIA, at(base, 800));

    assert!(!second.is_shown());
    assert_eq!(second.status_text(), None);
    assert_eq!(pipeline.stack().len(), 1);
    assert_eq!(pipeline.host().created(), 1);
    assert_eq!(pipeline.player().played, vec![SoundCue::HandRaise]);
}

#[test]
fn same_text_is_shown_again_after_the_window() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    assert!(pipeline.handle_json(MARIA, base).is_shown());
    assert!(matches!(
        pipeline.handle_json(MARIA, at(base, 4_000)),
        Outcome::Suppressed {
            verdict: Verdict::Duplicate,
            ..
        }
    ));
    assert!(pipeline.handle_json(MARIA, at(base, 5_100)).is_shown());
    assert_eq!(pipeline.player().played.len(), 2);
}

#[test]
fn five_chats_then_a_sixth_keep_five_on_screen() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    let mut shown = Vec::new();
    for i in 0..6u64 {
        let payload = format!(r#"{{"type":"chatMessage","from":"Student {i}","text":"question {i}"}}"#);
        match pipeline.handle_json(&payload, at(base, i * 150)) {
            Outcome::Shown { id, .. } => shown.push(id),
            other => panic!("chat {i} was not shown: {other:?}"),
        }
    }

    let stack = pipeline.stack();
    assert_eq!(stack.len(), 5);
    assert!(stack.surfaces().iter().all(|surface| surface.id() != shown[0]));
    let evicted = stack.get(shown[0]).expect("evicted surface is still fading");
    assert!(evicted.state().is_fading_out());
    assert_eq!(pipeline.player().played.len(), 6);
}

#[test]
fn stack_never_exceeds_capacity() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    for i in 0..40u64 {
        let payload = match i % 4 {
            0 => format!(r#"{{"type":"handSnackbar","text":"Student {i} raised their hand."}}"#),
            1 => format!(r#"{{"type":"chatMessage","from":"S{i}","text":"msg {i}"}}"#),
            2 => r#"{"type":"participantJoined","count":3}"#.to_owned(),
            _ => r#"{"type":"participantLeft","count":2}"#.to_owned(),
        };
        let now = at(base, i * 130);
        pipeline.handle_json(&payload, now);
        pipeline.advance(now);
        assert!(pipeline.stack().len() <= 5);
    }
}

#[test]
fn participant_left_plays_the_left_cue() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    pipeline.handle_json(r#"{"type":"participantJoined","count":4}"#, base);
    let outcome = pipeline.handle_json(r#"{"type":"participantLeft","count":3}"#, at(base, 200));

    assert!(matches!(
        outcome,
        Outcome::Shown {
            feedback: Feedback::Played(SoundCue::Left),
            ..
        }
    ));
    assert_eq!(
        pipeline.player().played,
        vec![SoundCue::HandRaise, SoundCue::Left]
    );
}

#[test]
fn muting_only_silences_audio() {
    let base = Instant::now();
    let mut muted = pipeline(true);
    let mut audible = pipeline(false);

    let payloads = [
        MARIA,
        MARIA,
        r#"{"type":"chatMessage","from":"Nikos","text":"hi"}"#,
        r#"{"type":"participantLeft","count":1}"#,
    ];
    for (i, payload) in payloads.iter().enumerate() {
        let now = at(base, i as u64 * 200);
        muted.handle_json(payload, now);
        audible.handle_json(payload, now);
    }

    assert!(muted.player().played.is_empty());
    assert_eq!(muted.player().alerts, 0);
    assert_eq!(muted.stack().len(), audible.stack().len());
    assert_eq!(muted.stack().len(), 3);
    assert_eq!(muted.filter().tracked(), audible.filter().tracked());
    assert_eq!(audible.player().played.len(), 3);
}

#[test]
fn unmuting_restores_audio() {
    let base = Instant::now();
    let mut pipeline = pipeline(true);

    pipeline.handle_json(MARIA, base);
    pipeline.set_muted(false);
    pipeline.handle_json(r#"{"type":"participantLeft","count":1}"#, at(base, 300));

    assert_eq!(pipeline.player().played, vec![SoundCue::Left]);
}

#[test]
fn bogus_message_changes_nothing() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    let outcome = pipeline.handle_json(r#"{"type":"bogus"}"#, base);

    assert!(matches!(outcome, Outcome::Ignored { .. }));
    assert!(outcome.status_text().is_some());
    assert!(pipeline.stack().is_empty());
    assert!(pipeline.host().calls.is_empty());
    assert!(pipeline.player().played.is_empty());
    // unrecognized input does not consume the throttle
    assert!(pipeline.handle_json(MARIA, at(base, 10)).is_shown());
}

#[test]
fn dom_storm_produces_a_single_toast() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    for i in 0..25u64 {
        pipeline.handle_json(MARIA, at(base, i * 7));
    }

    assert_eq!(pipeline.stack().len(), 1);
    assert_eq!(pipeline.player().played.len(), 1);
}

#[test]
fn failed_surface_creation_is_reported_and_retryable() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    pipeline.host_mut().fail_creation = true;
    let outcome = pipeline.handle_json(MARIA, base);
    assert!(matches!(outcome, Outcome::Failed { .. }));
    assert!(
        outcome
            .status_text()
            .is_some_and(|status| status.starts_with("Could not show notification"))
    );
    assert!(pipeline.player().played.is_empty());
    assert!(pipeline.stack().is_empty());

    pipeline.host_mut().fail_creation = false;
    assert!(pipeline.handle_json(MARIA, at(base, 300)).is_shown());
}

#[test]
fn toasts_expire_and_the_timeline_drains() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    pipeline.handle_json(MARIA, base);
    pipeline.handle_json(r#"{"type":"participantJoined","count":2}"#, at(base, 1_000));

    let mut now = base;
    while let Some(deadline) = pipeline.next_deadline() {
        now = deadline;
        pipeline.advance(now);
    }

    assert!(pipeline.stack().is_empty());
    assert_eq!(pipeline.host().closed().len(), 2);
    assert_eq!(now, at(base, 1_000 + 200 + 5_000 + 200));
}

#[test]
fn external_close_request_fades_the_toast_out() {
    let base = Instant::now();
    let mut pipeline = pipeline(false);

    let Outcome::Shown { id, .. } = pipeline.handle_json(MARIA, base) else {
        panic!("hand raise should be shown");
    };
    pipeline.advance(at(base, 200));
    assert!(matches!(
        pipeline.stack().get(id).map(|surface| surface.state()),
        Some(SurfaceState::Holding { .. })
    ));

    assert!(pipeline.dismiss(id, at(base, 1_000)));
    assert_eq!(pipeline.advance(at(base, 1_200)), vec![id]);
    assert!(pipeline.stack().is_empty());
}
