use std::time::Instant;

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};

use crate::{components::toast_card::ToastCard, overlay::OverlayEntity};

/// Root view of the transparent overlay window holding the toast stack.
pub struct ToastLayerView {
    overlay: Entity<OverlayEntity>,
}

impl ToastLayerView {
    pub fn new(overlay: Entity<OverlayEntity>, cx: &mut Context<Self>) -> Self {
        cx.observe(&overlay, |_, _, cx| cx.notify()).detach();
        Self { overlay }
    }
}

impl Render for ToastLayerView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();
        let overlay = self.overlay.read(cx);
        let frames = overlay.frames(now);
        if overlay.is_animating(now) {
            window.request_animation_frame();
        }

        div().size_full().relative().children(
            frames
                .into_iter()
                .map(|frame| ToastCard::new(frame, self.overlay.clone())),
        )
    }
}
