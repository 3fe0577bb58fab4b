use gpui::{
    App, Entity, IntoElement, ParentElement, RenderOnce, Styled, Window, div, hsla,
    prelude::FluentBuilder, px,
};
use gpui_component::{
    IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::overlay::{OverlayEntity, canvas::CardFrame};

/// One notification toast, drawn at its sampled position and opacity.
#[derive(IntoElement)]
pub struct ToastCard {
    frame: CardFrame,
    overlay: Entity<OverlayEntity>,
}

impl ToastCard {
    pub fn new(frame: CardFrame, overlay: Entity<OverlayEntity>) -> Self {
        Self { frame, overlay }
    }
}

impl RenderOnce for ToastCard {
    fn render(self, _: &mut Window, _: &mut App) -> impl IntoElement {
        let Self { frame, overlay } = self;
        let id = frame.id;
        let bounds = frame.bounds;

        div()
            .absolute()
            .left(px(bounds.origin.left))
            .top(px(bounds.origin.top))
            .w(px(bounds.size.width))
            .h(px(bounds.size.height))
            .opacity(frame.opacity)
            .flex()
            .items_start()
            .gap_3()
            .px_4()
            .py_3()
            .rounded_xl()
            .bg(hsla(0., 0., 0.08, 0.88))
            .border_1()
            .border_color(hsla(0., 0., 1., 0.18))
            .shadow_lg()
            .text_color(hsla(0., 0., 1., 0.95))
            .when(frame.emoji, |this| this.child(div().text_2xl().child("✋")))
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .font_semibold()
                    .line_clamp(3)
                    .overflow_hidden()
                    .child(frame.text),
            )
            .child(
                Button::new(("dismiss_toast", id.get() as usize))
                    .icon(IconName::Close)
                    .ghost()
                    .xsmall()
                    .on_click(move |_, _, cx| {
                        overlay.update(cx, |overlay, cx| overlay.dismiss(id, cx));
                    }),
            )
    }
}
