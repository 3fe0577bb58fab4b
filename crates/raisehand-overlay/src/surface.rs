//! Lifecycle of a single on-screen notification.

use std::time::{Duration, Instant};

use crate::host::{Point, SurfaceContent, SurfaceHost, SurfaceId};

/// Lifecycle state of a [`NotificationSurface`].
///
/// Timed states carry the deadline at which their current phase ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Created,
    FadingIn { until: Instant },
    Holding { until: Instant },
    FadingOut { until: Instant },
    Closed,
}

impl SurfaceState {
    pub fn deadline(&self) -> Option<Instant> {
        match *self {
            SurfaceState::FadingIn { until }
            | SurfaceState::Holding { until }
            | SurfaceState::FadingOut { until } => Some(until),
            SurfaceState::Created | SurfaceState::Closed => None,
        }
    }

    pub fn is_fading_out(&self) -> bool {
        matches!(self, SurfaceState::FadingOut { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, SurfaceState::Closed)
    }
}

/// Animation timings shared by every surface of a stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timings {
    pub fade: Duration,
    pub hold: Duration,
}

/// One visible toast.
#[derive(Debug, Clone)]
pub struct NotificationSurface {
    id: SurfaceId,
    content: SurfaceContent,
    created_at: Instant,
    origin: Point,
    slot: usize,
    state: SurfaceState,
}

impl NotificationSurface {
    pub(crate) fn new(
        id: SurfaceId,
        content: SurfaceContent,
        created_at: Instant,
        origin: Point,
    ) -> Self {
        Self {
            id,
            content,
            created_at,
            origin,
            slot: 0,
            state: SurfaceState::Created,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn content(&self) -> &SurfaceContent {
        &self.content
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Current (resting) top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Position in the stack, `0` being the oldest surface.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub(crate) fn place(&mut self, slot: usize, origin: Point) {
        self.slot = slot;
        self.origin = origin;
    }

    /// Shows the surface transparent and starts fading it in. Without a
    /// working animation the surface goes straight to full opacity.
    pub(crate) fn begin_fade_in<H: SurfaceHost + ?Sized>(
        &mut self,
        now: Instant,
        timings: Timings,
        host: &mut H,
    ) {
        if self.state != SurfaceState::Created {
            return;
        }

        let animated = host
            .show(self.id, 0.0)
            .and_then(|_| host.animate_opacity(self.id, 0.0, 1.0, timings.fade));

        self.state = match animated {
            Ok(()) => SurfaceState::FadingIn {
                until: now + timings.fade,
            },
            Err(e) => {
                log::warn!("Fade-in of surface {} unavailable: {e}", self.id);
                if let Err(e) = host
                    .set_opacity(self.id, 1.0)
                    .and_then(|_| host.show(self.id, 1.0))
                {
                    log::warn!("Failed to show surface {}: {e}", self.id);
                }
                SurfaceState::Holding {
                    until: now + timings.hold,
                }
            }
        };
    }

    /// Starts fading the surface out. Returns `false` when the surface was
    /// already fading out or closed.
    ///
    /// If the fade-out animation cannot be set up the surface is closed on
    /// the spot.
    pub(crate) fn dismiss<H: SurfaceHost + ?Sized>(
        &mut self,
        now: Instant,
        timings: Timings,
        host: &mut H,
    ) -> bool {
        if matches!(
            self.state,
            SurfaceState::FadingOut { .. } | SurfaceState::Closed
        ) {
            return false;
        }

        let from = self.opacity(now, timings);
        match host.animate_opacity(self.id, from, 0.0, timings.fade) {
            Ok(()) => {
                self.state = SurfaceState::FadingOut {
                    until: now + timings.fade,
                };
            }
            Err(e) => {
                log::warn!("Fade-out of surface {} unavailable: {e}", self.id);
                self.close(host);
            }
        }

        true
    }

    /// Applies every transition that is due at `now`. Returns `true` when the
    /// surface reached [`SurfaceState::Closed`] during this call.
    pub(crate) fn advance<H: SurfaceHost + ?Sized>(
        &mut self,
        now: Instant,
        timings: Timings,
        host: &mut H,
    ) -> bool {
        while let Some(until) = self.state.deadline() {
            if until > now {
                break;
            }

            match self.state {
                SurfaceState::FadingIn { .. } => {
                    // hold from the end of the fade, not from the tick
                    self.state = SurfaceState::Holding {
                        until: until + timings.hold,
                    };
                }
                SurfaceState::Holding { .. } => {
                    self.dismiss(now, timings, host);
                }
                SurfaceState::FadingOut { .. } => {
                    self.close(host);
                }
                SurfaceState::Created | SurfaceState::Closed => break,
            }
        }

        self.state.is_closed()
    }

    /// Closes the surface immediately, skipping any animation.
    pub(crate) fn close<H: SurfaceHost + ?Sized>(&mut self, host: &mut H) {
        if self.state.is_closed() {
            return;
        }

        host.close(self.id);
        self.state = SurfaceState::Closed;
    }

    fn opacity(&self, now: Instant, timings: Timings) -> f32 {
        match self.state {
            SurfaceState::Created | SurfaceState::Closed => 0.0,
            SurfaceState::FadingIn { until } => {
                if timings.fade.is_zero() {
                    return 1.0;
                }
                let remaining = until.saturating_duration_since(now);
                1.0 - remaining.as_secs_f32() / timings.fade.as_secs_f32()
            }
            SurfaceState::Holding { .. } => 1.0,
            SurfaceState::FadingOut { until } => {
                if timings.fade.is_zero() {
                    return 0.0;
                }
                let remaining = until.saturating_duration_since(now);
                remaining.as_secs_f32() / timings.fade.as_secs_f32()
            }
        }
    }
}
