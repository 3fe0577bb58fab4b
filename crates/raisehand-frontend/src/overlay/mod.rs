pub mod canvas;
pub mod gate;

use std::time::{Duration, Instant};

use gpui::Context;
use raisehand_audio::player::RodioSoundPlayer;
use raisehand_bridge::{Language, config::Config};
use raisehand_overlay::{
    NotificationPipeline, OverlaySettings, Outcome, Point, Rect, Size, SurfaceId,
};

use crate::overlay::{
    canvas::{CardFrame, ToastCanvas},
    gate::FeedGate,
};

/// Redraw interval while cards are animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest sleep of the tick loop while nothing is due.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Size of the overlay window able to hold a full stack, including the room
/// a new card slides in from.
pub fn layer_size(settings: &OverlaySettings) -> Size {
    let cards = settings.capacity.max(1) as f32;
    Size::new(
        settings.card_size.width + settings.margin * 2.0,
        cards * (settings.card_size.height + settings.spacing)
            + settings.margin * 2.0
            + settings.slide_offset,
    )
}

fn layer_area(settings: &OverlaySettings) -> Rect {
    Rect::new(Point::default(), layer_size(settings))
}

/// Owns the notification pipeline of the application. Lives on the UI
/// thread; every mutation goes through `Entity::update`.
pub struct OverlayEntity {
    pipeline: NotificationPipeline<ToastCanvas, RodioSoundPlayer>,
    gate: FeedGate,
}

impl OverlayEntity {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let settings = OverlaySettings::default();
        let pipeline = NotificationPipeline::new(
            settings.clone(),
            Language::default(),
            false,
            ToastCanvas::new(layer_area(&settings)),
            RodioSoundPlayer::default(),
        );

        cx.spawn(async move |this, cx| {
            loop {
                let Ok(delay) = this.update(cx, |overlay, cx| overlay.tick(cx)) else {
                    break;
                };
                cx.background_executor().timer(delay).await;
            }
        })
        .detach();

        Self {
            pipeline,
            gate: FeedGate::new(),
        }
    }

    /// Feeds one message of the browser feed through the pipeline. Returns
    /// `None` while the message is held until the configuration arrives.
    pub fn handle_browser_message(
        &mut self,
        payload: &str,
        cx: &mut Context<Self>,
    ) -> Option<Outcome> {
        let now = Instant::now();
        let payload = self.gate.offer(payload, now)?;
        let outcome = self.pipeline.handle_json(&payload, now);
        if outcome.is_shown() {
            cx.notify();
        }
        Some(outcome)
    }

    /// Fades out a card the user clicked away.
    pub fn dismiss(&mut self, id: SurfaceId, cx: &mut Context<Self>) {
        if self.pipeline.dismiss(id, Instant::now()) {
            cx.notify();
        }
    }

    /// Applies the configuration and handles the page events held back
    /// until now, returning their outcomes.
    pub fn apply_config(&mut self, config: &Config, cx: &mut Context<Self>) -> Vec<Outcome> {
        let settings = config.overlay.settings();
        self.pipeline.host_mut().set_area(layer_area(&settings));
        self.pipeline.reconfigure(settings);
        self.pipeline.set_muted(config.muted);
        self.pipeline.set_language(config.language);
        self.pipeline
            .player_mut()
            .configure(config.sounds.cue_files(), config.sounds.volume());

        let outcomes = self
            .gate
            .open()
            .iter()
            .map(|(payload, arrived)| self.pipeline.handle_json(payload, *arrived))
            .collect();
        cx.notify();
        outcomes
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.pipeline.set_muted(muted);
    }

    pub fn is_muted(&self) -> bool {
        self.pipeline.is_muted()
    }

    pub fn set_language(&mut self, language: Language) {
        self.pipeline.set_language(language);
    }

    pub fn language(&self) -> Language {
        self.pipeline.language()
    }

    pub fn frames(&self, now: Instant) -> Vec<CardFrame> {
        self.pipeline.host().frames(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.pipeline.host().is_animating(now)
    }

    pub fn settings(&self) -> &OverlaySettings {
        self.pipeline.stack().settings()
    }

    pub fn close_all(&mut self, cx: &mut Context<Self>) {
        self.pipeline.close_all();
        cx.notify();
    }

    /// Runs due transitions and returns how long to sleep until the next one.
    fn tick(&mut self, cx: &mut Context<Self>) -> Duration {
        let now = Instant::now();
        let closed = self.pipeline.advance(now);
        let animating = self.pipeline.host().is_animating(now);
        if !closed.is_empty() || animating {
            cx.notify();
        }

        if animating {
            return FRAME_INTERVAL;
        }
        self.pipeline
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(IDLE_INTERVAL)
            .clamp(FRAME_INTERVAL, IDLE_INTERVAL)
    }
}
