use raisehand_bridge::{
    Language, MessageFromBackend, config::Config, notification::NotificationType,
};

/// Handles an incoming configuration request (see
/// [`raisehand_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: super::AppContextHandle) {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    context
        .send(MessageFromBackend::ConfigurationResponse(config))
        .await;
}

/// Persists a new mute preference.
pub async fn handle_set_muted(context: super::AppContextHandle, muted: bool) {
    update_config(&context, |config| config.muted = muted).await;
}

/// Persists a new language of the hosted page.
pub async fn handle_set_language(context: super::AppContextHandle, language: Language) {
    update_config(&context, |config| config.language = language).await;
}

async fn update_config(context: &super::AppContextHandle, change: impl FnOnce(&mut Config)) {
    let (config, path) = {
        let mut state = context.state.write().await;
        change(&mut state.config);
        (state.config.clone(), state.config_path.clone())
    };

    let Some(path) = path else {
        log::debug!("No configuration file, keeping the change in memory");
        return;
    };

    // persist the updated settings so they are remembered across runs
    if let Err(e) = crate::config::save_config(&path, &config).await {
        log::error!("Failed to save configuration to {path:?}: {e}");
        context
            .send_notification(
                NotificationType::Warning,
                format!("Settings could not be saved: {e}"),
            )
            .await;
    }
}
