use gpui::{AppContext, Entity, SharedString};

/// Latest line shown in the status bar of the shell window.
#[derive(Debug, Clone)]
pub struct StatusEntity {
    pub text: SharedString,
}

impl Default for StatusEntity {
    fn default() -> Self {
        Self {
            text: "Waiting for the classroom page...".into(),
        }
    }
}

impl StatusEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, text: impl Into<SharedString>, cx: &mut C) {
        let text = text.into();
        let _ = entity.update(cx, |this, cx| {
            this.text = text;
            cx.notify();
        });
    }
}
