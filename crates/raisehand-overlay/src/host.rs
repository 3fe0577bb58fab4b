//! Geometry primitives and the windowing seam of the overlay engine.

use std::{fmt, time::Duration};

/// Identity of a notification surface, unique for the lifetime of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Top-left anchor of a surface, in the coordinate space of the host's work
/// area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub left: f32,
    pub top: f32,
}

impl Point {
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn right(&self) -> f32 {
        self.origin.left + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.top + self.size.height
    }
}

/// What a surface displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceContent {
    /// Final display text, possibly spanning several lines.
    pub text: String,
    /// Whether the card shows the raised-hand emoji next to the text.
    pub emoji: bool,
}

/// Failures reported by the windowing collaborator.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host has no surface with the given identity.
    #[error("surface {0} is not known to the host")]
    UnknownSurface(SurfaceId),
    /// The surface could not be created at all.
    #[error("failed to create surface: {0}")]
    Creation(String),
    /// An animation could not be set up. Callers fall back to an immediate,
    /// non-animated change.
    #[error("animation is unavailable: {0}")]
    Animation(String),
}

/// Windowing collaborator hosting the notification surfaces.
///
/// Every call happens on the thread that owns the pipeline. Animations are
/// fire-and-forget: the engine tracks their completion through its own
/// deadlines, so an implementation only has to play them.
pub trait SurfaceHost {
    /// Area the stack is laid out in. Surfaces are anchored to its
    /// bottom-right corner.
    fn work_area(&self) -> Rect;

    /// Creates a hidden always-on-top surface with the given content and
    /// bounds.
    fn create(
        &mut self,
        id: SurfaceId,
        content: &SurfaceContent,
        bounds: Rect,
    ) -> Result<(), HostError>;

    /// Makes a created surface visible at the given opacity.
    fn show(&mut self, id: SurfaceId, opacity: f32) -> Result<(), HostError>;

    /// Moves a surface to a new origin without animation.
    fn move_to(&mut self, id: SurfaceId, origin: Point) -> Result<(), HostError>;

    /// Animates the origin of a surface between two points.
    fn animate_position(
        &mut self,
        id: SurfaceId,
        from: Point,
        to: Point,
        duration: Duration,
    ) -> Result<(), HostError>;

    /// Sets the opacity of a surface without animation.
    fn set_opacity(&mut self, id: SurfaceId, opacity: f32) -> Result<(), HostError>;

    /// Animates the opacity of a surface between two values.
    fn animate_opacity(
        &mut self,
        id: SurfaceId,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> Result<(), HostError>;

    /// Destroys a surface. Closing an unknown surface is a no-op.
    fn close(&mut self, id: SurfaceId);
}
