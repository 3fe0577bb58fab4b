mod toast_layer_view;

use gpui::{
    App, AppContext, Bounds, ClickEvent, Context, IntoElement, ParentElement, Render, Styled,
    Window, WindowBackgroundAppearance, WindowBounds, WindowHandle, WindowKind, WindowOptions, div,
    point, px, size,
};
use gpui_component::{
    ActiveTheme, Root, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    switch::Switch,
};
use raisehand_bridge::Language;

use crate::{
    BackendBridge, components::settings_item::SettingsItem, entities::DataEntities,
    overlay::layer_size,
};

pub use toast_layer_view::ToastLayerView;

/// Opens the always-on-top, unfocusable window the toasts are drawn in,
/// anchored to the bottom-right corner of the primary display.
pub fn open_toast_layer(data: &DataEntities, cx: &mut App) -> anyhow::Result<WindowHandle<Root>> {
    let layer = layer_size(data.overlay.read(cx).settings());
    let (width, height) = (px(layer.width), px(layer.height));

    let display = cx
        .primary_display()
        .ok_or_else(|| anyhow::anyhow!("no display to show notifications on"))?;
    let display_bounds = display.bounds();
    let origin = point(
        display_bounds.origin.x + display_bounds.size.width - width,
        display_bounds.origin.y + display_bounds.size.height - height,
    );

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::new(
            origin,
            size(width, height),
        ))),
        titlebar: None,
        focus: false,
        show: true,
        kind: WindowKind::PopUp,
        is_movable: false,
        is_resizable: false,
        is_minimizable: false,
        display_id: Some(display.id()),
        window_background: WindowBackgroundAppearance::Transparent,
        app_id: Some("raisehand".to_owned()),
        ..WindowOptions::default()
    };

    let overlay = data.overlay.clone();
    let handle = cx.open_window(options, |window, cx| {
        let view = cx.new(|cx| ToastLayerView::new(overlay, cx));
        cx.new(|cx| Root::new(view, window, cx))
    })?;
    Ok(handle)
}

/// Main window of the shell: status line and notification preferences.
pub struct ShellView {
    data: DataEntities,
}

impl ShellView {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.status, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.settings, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }

    fn toggle_muted(&mut self, muted: bool, cx: &mut Context<Self>) {
        self.data.overlay.update(cx, |overlay, _| overlay.set_muted(muted));
        self.data.settings.update(cx, |settings, cx| {
            settings.config.muted = muted;
            cx.notify();
        });

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| bridge.set_muted(muted).await)
            .detach();
    }

    fn switch_language(&mut self, cx: &mut Context<Self>) {
        let language = match self.data.overlay.read(cx).language() {
            Language::English => Language::Greek,
            Language::Greek => Language::English,
        };
        self.data
            .overlay
            .update(cx, |overlay, _| overlay.set_language(language));
        self.data.settings.update(cx, |settings, cx| {
            settings.config.language = language;
            cx.notify();
        });

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| bridge.set_language(language).await)
            .detach();
    }
}

impl Render for ShellView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);
        let config = self.data.settings.read(cx).config.clone();
        let status = self.data.status.read(cx).text.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .p_5()
            .child(div().child("Raise Hand").text_2xl().font_bold())
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Notifications").text_xl().font_bold())
                    .child(
                        SettingsItem::new("Mute sounds")
                            .description("Toasts are still shown while muted.")
                            .control(Switch::new("mute_sounds").checked(config.muted).on_click(
                                cx.listener(|this, checked: &bool, _, cx| {
                                    this.toggle_muted(*checked, cx);
                                }),
                            )),
                    )
                    .child(
                        SettingsItem::new("Classroom language")
                            .description("Language of the page and of generated texts.")
                            .control(
                                Button::new("switch_language")
                                    .label(config.language.code().to_uppercase())
                                    .outline()
                                    .small()
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                        this.switch_language(cx);
                                    })),
                            ),
                    ),
            )
            .child(
                div()
                    .mt_auto()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(status),
            )
            .children(notification_layer)
    }
}
