use gpui::{AnyElement, IntoElement, ParentElement, SharedString, Styled, div, prelude::FluentBuilder};
use gpui_component::StyledExt;

/// Labelled row of the shell window with a control on the right.
#[derive(Default, IntoElement)]
pub struct SettingsItem {
    label: SharedString,
    description: Option<SharedString>,
    control: Option<AnyElement>,
}

impl SettingsItem {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn control(mut self, control: impl IntoElement) -> Self {
        self.control = Some(control.into_any_element());
        self
    }
}

impl gpui::RenderOnce for SettingsItem {
    fn render(self, _: &mut gpui::Window, _: &mut gpui::App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(div().child(self.label).font_semibold())
                    .when_some(self.description, |this, description| {
                        this.child(div().text_sm().opacity(0.7).child(description))
                    }),
            )
            .when_some(self.control, |this, control| this.child(control))
    }
}
