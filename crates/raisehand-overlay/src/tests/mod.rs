use std::time::Duration;

use crate::{
    feedback::{PlaybackError, SoundCue, SoundPlayer},
    host::{HostError, Point, Rect, Size, SurfaceContent, SurfaceHost, SurfaceId},
};

mod scenarios;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    Create(SurfaceId, String),
    Show(SurfaceId, f32),
    MoveTo(SurfaceId, Point),
    AnimatePosition(SurfaceId, Point, Point),
    SetOpacity(SurfaceId, f32),
    AnimateOpacity(SurfaceId, f32, f32),
    Close(SurfaceId),
}

/// Windowing double that records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub fail_creation: bool,
    pub fail_animations: bool,
}

impl RecordingHost {
    pub fn closed(&self) -> Vec<SurfaceId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Close(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn created(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Create(..)))
            .count()
    }
}

impl SurfaceHost for RecordingHost {
    fn work_area(&self) -> Rect {
        Rect::new(Point::new(0.0, 0.0), Size::new(1000.0, 800.0))
    }

    fn create(
        &mut self,
        id: SurfaceId,
        content: &SurfaceContent,
        _: Rect,
    ) -> Result<(), HostError> {
        if self.fail_creation {
            return Err(HostError::Creation("window quota exhausted".into()));
        }
        self.calls.push(HostCall::Create(id, content.text.clone()));
        Ok(())
    }

    fn show(&mut self, id: SurfaceId, opacity: f32) -> Result<(), HostError> {
        self.calls.push(HostCall::Show(id, opacity));
        Ok(())
    }

    fn move_to(&mut self, id: SurfaceId, origin: Point) -> Result<(), HostError> {
        self.calls.push(HostCall::MoveTo(id, origin));
        Ok(())
    }

    fn animate_position(
        &mut self,
        id: SurfaceId,
        from: Point,
        to: Point,
        _: Duration,
    ) -> Result<(), HostError> {
        if self.fail_animations {
            return Err(HostError::Animation("disabled".into()));
        }
        self.calls.push(HostCall::AnimatePosition(id, from, to));
        Ok(())
    }

    fn set_opacity(&mut self, id: SurfaceId, opacity: f32) -> Result<(), HostError> {
        self.calls.push(HostCall::SetOpacity(id, opacity));
        Ok(())
    }

    fn animate_opacity(
        &mut self,
        id: SurfaceId,
        from: f32,
        to: f32,
        _: Duration,
    ) -> Result<(), HostError> {
        if self.fail_animations {
            return Err(HostError::Animation("disabled".into()));
        }
        self.calls.push(HostCall::AnimateOpacity(id, from, to));
        Ok(())
    }

    fn close(&mut self, id: SurfaceId) {
        self.calls.push(HostCall::Close(id));
    }
}

/// Audio double recording the cues it played.
#[derive(Debug, Default)]
pub(crate) struct RecordingPlayer {
    pub played: Vec<SoundCue>,
    pub alerts: usize,
    pub fail_cues: bool,
    pub fail_alert: bool,
}

impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlaybackError> {
        if self.fail_cues {
            return Err(PlaybackError::MissingCue(cue.name()));
        }
        self.played.push(cue);
        Ok(())
    }

    fn play_alert(&mut self) -> Result<(), PlaybackError> {
        if self.fail_alert {
            return Err(PlaybackError::Unavailable("no output device".into()));
        }
        self.alerts += 1;
        Ok(())
    }
}
