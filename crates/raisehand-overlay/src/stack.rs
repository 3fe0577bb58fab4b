//! Bounded stack of visible notification surfaces.

use std::time::Instant;

use crate::{
    OverlaySettings,
    host::{HostError, Point, Rect, SurfaceContent, SurfaceHost, SurfaceId},
    surface::{NotificationSurface, Timings},
};

/// Errors that can occur while admitting a new notification.
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    /// The windowing collaborator refused to create the surface. The stack is
    /// left exactly as it was.
    #[error("failed to create notification surface {id}: {source}")]
    Creation {
        id: SurfaceId,
        #[source]
        source: HostError,
    },
}

/// Owns every surface that is currently on screen.
///
/// Surfaces are kept in insertion order, oldest first, and are laid out
/// bottom-up from the bottom-right corner of the host's work area so that the
/// newest one sits closest to the corner. Surfaces evicted for capacity leave
/// the stack at once but keep fading out on their own until closed.
#[derive(Debug)]
pub struct OverlayStack {
    settings: OverlaySettings,
    surfaces: Vec<NotificationSurface>,
    retiring: Vec<NotificationSurface>,
    next_id: u64,
}

impl OverlayStack {
    pub fn new(settings: OverlaySettings) -> Self {
        Self {
            settings,
            surfaces: Vec::new(),
            retiring: Vec::new(),
            next_id: 1,
        }
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    pub(crate) fn set_settings(&mut self, settings: OverlaySettings) {
        self.settings = settings;
    }

    pub fn capacity(&self) -> usize {
        self.settings.capacity.max(1)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Surfaces in display order, oldest first.
    pub fn surfaces(&self) -> &[NotificationSurface] {
        &self.surfaces
    }

    /// Surfaces evicted from the stack whose fade-out is still playing.
    pub fn retiring(&self) -> &[NotificationSurface] {
        &self.retiring
    }

    pub fn get(&self, id: SurfaceId) -> Option<&NotificationSurface> {
        self.surfaces
            .iter()
            .chain(self.retiring.iter())
            .find(|surface| surface.id() == id)
    }

    /// Creates a surface for `content` and puts it on top of the stack,
    /// evicting the oldest surface when the stack is full.
    pub fn admit<H: SurfaceHost + ?Sized>(
        &mut self,
        content: SurfaceContent,
        now: Instant,
        host: &mut H,
    ) -> Result<SurfaceId, StackError> {
        let id = SurfaceId::new(self.next_id);
        self.next_id += 1;

        // the newest surface always rests closest to the corner, so it can be
        // created before the stack is touched
        let area = host.work_area();
        let rest = resting_origin(&self.settings, area, 0);
        let entry = Point::new(rest.left, rest.top + self.settings.slide_offset);
        host.create(id, &content, Rect::new(entry, self.settings.card_size))
            .map_err(|source| StackError::Creation { id, source })?;

        while self.surfaces.len() >= self.capacity() {
            self.evict_oldest(now, host);
        }

        self.surfaces
            .push(NotificationSurface::new(id, content, now, entry));
        self.relayout(area, Some(id), host);

        let timings = self.timings();
        if let Some(surface) = self.surfaces.last_mut() {
            surface.begin_fade_in(now, timings, host);
        }

        log::debug!("Admitted surface {id}, {} on screen", self.surfaces.len());
        Ok(id)
    }

    /// Starts fading out the surface with the given id, e.g. after the user
    /// clicked it away. Returns `false` if the surface is unknown or already
    /// fading out.
    pub fn dismiss<H: SurfaceHost + ?Sized>(
        &mut self,
        id: SurfaceId,
        now: Instant,
        host: &mut H,
    ) -> bool {
        let timings = self.timings();
        let Some(index) = self.surfaces.iter().position(|surface| surface.id() == id) else {
            return false;
        };

        let dismissed = self.surfaces[index].dismiss(now, timings, host);
        if self.surfaces[index].state().is_closed() {
            self.surfaces.remove(index);
            let area = host.work_area();
            self.relayout(area, None, host);
        }

        dismissed
    }

    /// Applies every due lifecycle transition and drops closed surfaces,
    /// closing the gaps they left. Returns the ids closed by this call.
    pub fn advance<H: SurfaceHost + ?Sized>(
        &mut self,
        now: Instant,
        host: &mut H,
    ) -> Vec<SurfaceId> {
        let timings = self.timings();
        let mut closed = Vec::new();

        self.retiring.retain_mut(|surface| {
            let done = surface.advance(now, timings, host);
            if done {
                closed.push(surface.id());
            }
            !done
        });

        let before = self.surfaces.len();
        self.surfaces.retain_mut(|surface| {
            let done = surface.advance(now, timings, host);
            if done {
                closed.push(surface.id());
            }
            !done
        });

        if self.surfaces.len() != before {
            let area = host.work_area();
            self.relayout(area, None, host);
        }

        closed
    }

    /// Earliest pending transition across all surfaces.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.surfaces
            .iter()
            .chain(self.retiring.iter())
            .filter_map(|surface| surface.state().deadline())
            .min()
    }

    /// Closes every surface immediately, e.g. when the shell shuts down.
    pub fn close_all<H: SurfaceHost + ?Sized>(&mut self, host: &mut H) {
        for surface in self.surfaces.iter_mut().chain(self.retiring.iter_mut()) {
            surface.close(host);
        }
        self.surfaces.clear();
        self.retiring.clear();
    }

    fn evict_oldest<H: SurfaceHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        if self.surfaces.is_empty() {
            return;
        }

        let timings = self.timings();
        let mut oldest = self.surfaces.remove(0);
        oldest.dismiss(now, timings, host);
        log::debug!("Evicted surface {} to make room", oldest.id());

        if !oldest.state().is_closed() {
            self.retiring.push(oldest);
        }
    }

    /// Puts every surface at its resting position. The surface named by
    /// `entering` slides in from where it was created, all others snap.
    fn relayout<H: SurfaceHost + ?Sized>(
        &mut self,
        area: Rect,
        entering: Option<SurfaceId>,
        host: &mut H,
    ) {
        let count = self.surfaces.len();
        for (slot, surface) in self.surfaces.iter_mut().enumerate() {
            let target = resting_origin(&self.settings, area, count - 1 - slot);
            let current = surface.origin();

            if entering == Some(surface.id()) {
                if let Err(e) =
                    host.animate_position(surface.id(), current, target, self.settings.slide)
                {
                    log::warn!("Slide-in of surface {} unavailable: {e}", surface.id());
                    if let Err(e) = host.move_to(surface.id(), target) {
                        log::warn!("Failed to move surface {}: {e}", surface.id());
                    }
                }
            } else if current != target
                && let Err(e) = host.move_to(surface.id(), target)
            {
                log::warn!("Failed to move surface {}: {e}", surface.id());
            }

            surface.place(slot, target);
        }
    }

    fn timings(&self) -> Timings {
        Timings {
            fade: self.settings.fade,
            hold: self.settings.hold,
        }
    }
}

/// Resting top-left corner of the surface `from_corner` places away from the
/// bottom-right corner of `area`.
fn resting_origin(settings: &OverlaySettings, area: Rect, from_corner: usize) -> Point {
    let card = settings.card_size;
    let step = card.height + settings.spacing;
    Point::new(
        area.right() - settings.margin - card.width,
        area.bottom() - settings.margin - card.height - step * from_corner as f32,
    )
}
