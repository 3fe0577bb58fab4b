//! Toast cards drawn inside the transparent overlay window.
//!
//! The canvas implements [`SurfaceHost`] by keeping every card as plain data:
//! animations are stored as tracks that are sampled each frame, so nothing
//! here touches gpui directly.

use std::time::{Duration, Instant};

use raisehand_overlay::{HostError, Point, Rect, SurfaceContent, SurfaceHost, SurfaceId};

/// Upper bound on the cards the canvas holds, fading ones included.
pub const MAX_CARDS: usize = 32;

/// Value moving from `from` to `to` over `duration`, starting at `start`.
#[derive(Debug, Clone, Copy)]
struct Track<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
}

impl<T: Lerp> Track<T> {
    fn fixed(value: T, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn sample(&self, now: Instant) -> T {
        T::lerp(self.from, self.to, ease_out(self.progress(now)))
    }

    fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}

trait Lerp: Copy {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Point {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Point::new(
            f32::lerp(from.left, to.left, t),
            f32::lerp(from.top, to.top, t),
        )
    }
}

// cubic ease-out
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone)]
struct Card {
    id: SurfaceId,
    content: SurfaceContent,
    bounds: Rect,
    visible: bool,
    position: Track<Point>,
    opacity: Track<f32>,
}

/// Resolved state of one card for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFrame {
    pub id: SurfaceId,
    pub text: String,
    pub emoji: bool,
    pub bounds: Rect,
    pub opacity: f32,
}

/// In-window [`SurfaceHost`]: every surface is a card on one transparent
/// layer whose size is the work area.
#[derive(Debug)]
pub struct ToastCanvas {
    area: Rect,
    cards: Vec<Card>,
}

impl ToastCanvas {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            cards: Vec::new(),
        }
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Visible cards at `now`, in paint order.
    pub fn frames(&self, now: Instant) -> Vec<CardFrame> {
        self.cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| CardFrame {
                id: card.id,
                text: card.content.text.clone(),
                emoji: card.content.emoji,
                bounds: Rect::new(card.position.sample(now), card.bounds.size),
                opacity: card.opacity.sample(now).clamp(0.0, 1.0),
            })
            .collect()
    }

    /// Whether any visible card still has an animation playing.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.iter().any(|card| {
            card.visible && (card.position.is_running(now) || card.opacity.is_running(now))
        })
    }

    fn card_mut(&mut self, id: SurfaceId) -> Result<&mut Card, HostError> {
        self.cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(HostError::UnknownSurface(id))
    }
}

impl SurfaceHost for ToastCanvas {
    fn work_area(&self) -> Rect {
        self.area
    }

    fn create(
        &mut self,
        id: SurfaceId,
        content: &SurfaceContent,
        bounds: Rect,
    ) -> Result<(), HostError> {
        if self.cards.len() >= MAX_CARDS {
            return Err(HostError::Creation(format!(
                "the overlay already holds {MAX_CARDS} cards"
            )));
        }

        let now = Instant::now();
        self.cards.push(Card {
            id,
            content: content.clone(),
            bounds,
            visible: false,
            position: Track::fixed(bounds.origin, now),
            opacity: Track::fixed(0.0, now),
        });
        Ok(())
    }

    fn show(&mut self, id: SurfaceId, opacity: f32) -> Result<(), HostError> {
        let card = self.card_mut(id)?;
        card.visible = true;
        card.opacity = Track::fixed(opacity, Instant::now());
        Ok(())
    }

    fn move_to(&mut self, id: SurfaceId, origin: Point) -> Result<(), HostError> {
        let card = self.card_mut(id)?;
        card.bounds.origin = origin;
        card.position = Track::fixed(origin, Instant::now());
        Ok(())
    }

    fn animate_position(
        &mut self,
        id: SurfaceId,
        from: Point,
        to: Point,
        duration: Duration,
    ) -> Result<(), HostError> {
        let card = self.card_mut(id)?;
        card.bounds.origin = to;
        card.position = Track {
            from,
            to,
            start: Instant::now(),
            duration,
        };
        Ok(())
    }

    fn set_opacity(&mut self, id: SurfaceId, opacity: f32) -> Result<(), HostError> {
        let card = self.card_mut(id)?;
        card.opacity = Track::fixed(opacity, Instant::now());
        Ok(())
    }

    fn animate_opacity(
        &mut self,
        id: SurfaceId,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> Result<(), HostError> {
        let card = self.card_mut(id)?;
        card.opacity = Track {
            from,
            to,
            start: Instant::now(),
            duration,
        };
        Ok(())
    }

    fn close(&mut self, id: SurfaceId) {
        self.cards.retain(|card| card.id != id);
    }
}
