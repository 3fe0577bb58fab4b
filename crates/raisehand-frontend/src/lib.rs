use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::{
    Root, WindowExt,
    notification::{Notification, NotificationType},
};
use raisehand_bridge::{Language, MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc;

use crate::{
    entities::{settings_entity::SettingsEntity, status_entity::StatusEntity},
    overlay::OverlayEntity,
};

pub mod components;
pub mod entities;
pub mod overlay;
mod views;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: MessageToBackend) {
        if let Err(e) = self.to_backend.send(message).await {
            log::error!("Backend is gone, dropping {:?}", e.0);
        }
    }

    pub async fn request_config(&self) {
        self.send(MessageToBackend::ConfigurationRequest).await;
    }

    pub async fn set_muted(&self, muted: bool) {
        self.send(MessageToBackend::SetMuted(muted)).await;
    }

    pub async fn set_language(&self, language: Language) {
        self.send(MessageToBackend::SetLanguage(language)).await;
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let data = entities::DataEntities {
            settings: cx.new(|_| SettingsEntity::default()),
            status: cx.new(|_| StatusEntity::default()),
            overlay: cx.new(OverlayEntity::new),
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                let window_handle = window.window_handle();
                cx.spawn(async move |cx| {
                    let mut toast_layer = None;
                    while let Some(message) = rx.recv().await {
                        match message {
                            MessageFromBackend::BrowserMessage(payload) => {
                                let Ok(outcome) = listener_data.overlay.update(cx, |overlay, cx| {
                                    overlay.handle_browser_message(&payload, cx)
                                }) else {
                                    break;
                                };
                                if let Some(text) = outcome.and_then(|outcome| outcome.status_text())
                                {
                                    StatusEntity::update(&listener_data.status, text, cx);
                                }
                            }
                            MessageFromBackend::ConfigurationResponse(config) => {
                                let held = listener_data
                                    .overlay
                                    .update(cx, |overlay, cx| overlay.apply_config(&config, cx))
                                    .unwrap_or_default();
                                SettingsEntity::update(&listener_data.settings, config, cx);
                                if let Some(text) =
                                    held.iter().rev().find_map(|outcome| outcome.status_text())
                                {
                                    StatusEntity::update(&listener_data.status, text, cx);
                                }

                                // the layer is sized for the configured capacity
                                if toast_layer.is_none() {
                                    match cx.update(|cx| views::open_toast_layer(&listener_data, cx))
                                    {
                                        Ok(Ok(handle)) => toast_layer = Some(handle),
                                        Ok(Err(e)) | Err(e) => {
                                            log::error!("Failed to open the notification layer: {e}");
                                        }
                                    }
                                }
                            }
                            MessageFromBackend::NotificationMessage(notification) => {
                                let notification_type = match notification.notification_type {
                                    raisehand_bridge::notification::NotificationType::Info => {
                                        NotificationType::Info
                                    }
                                    raisehand_bridge::notification::NotificationType::Warning => {
                                        NotificationType::Warning
                                    }
                                    raisehand_bridge::notification::NotificationType::Error => {
                                        NotificationType::Error
                                    }
                                };
                                let pushed = window_handle.update(cx, |_, window, cx| {
                                    let notification = Notification::new()
                                        .message(notification.message)
                                        .with_type(notification_type);
                                    window.push_notification(notification, cx);
                                });
                                if pushed.is_err() {
                                    break;
                                }
                            }
                        }
                    }

                    log::info!("Stopped listening to the backend");
                    let _ = listener_data
                        .overlay
                        .update(cx, |overlay, cx| overlay.close_all(cx));
                })
                .detach();

                cx.spawn(async move |_| bridge.request_config().await)
                    .detach();

                let view = cx.new(|cx| crate::views::ShellView::new(&data, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
