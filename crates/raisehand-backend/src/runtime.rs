//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, the browser feed
//! relay and the message dispatch loop that listens to frontend requests.

use std::{sync::Arc, thread};

use raisehand_bridge::{
    MessageFromBackend, MessageToBackend, config::Config, notification::NotificationType,
};
use tokio::{
    io::{AsyncBufRead, BufReader},
    sync::{
        RwLock,
        mpsc::{Receiver, Sender},
    },
};

use crate::app::AppContext;
use crate::services::AppContextHandle;
use crate::state::State;

/// Resolves and loads the configuration. Failures fall back to defaults so
/// that the overlay keeps working; the returned message explains why.
async fn resolve_config() -> (Config, Option<std::path::PathBuf>, Option<String>) {
    let path = match crate::config::config_path() {
        Ok(path) => path,
        Err(e) => {
            log::error!("Configuration directory unavailable: {e}");
            return (Config::default(), None, Some(e.to_string()));
        }
    };

    match crate::config::load_config(&path).await {
        Ok(config) => (config, Some(path), None),
        Err(e) => {
            log::error!("Failed to load configuration from {path:?}: {e}");
            // keep the broken file untouched, the user may want to fix it
            (Config::default(), None, Some(e.to_string()))
        }
    }
}

/// Sends the configuration, starts relaying `feed` and then serves frontend
/// requests until the bridge closes.
async fn serve<R>(context: AppContextHandle, rx: Receiver<MessageToBackend>, feed: R)
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    // the configuration has to reach the frontend before any page event
    crate::services::config_service::handle_config_request(context.clone()).await;
    tokio::spawn(crate::services::feed_service::relay_feed(
        context.clone(),
        feed,
    ));
    context.consume_bridge_messages(rx).await;
}

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let (config, config_path, problem) = resolve_config().await;

    let state = Arc::new(RwLock::new(State {
        config,
        config_path,
    }));

    let context = Arc::new(AppContext { state, tx });
    if let Some(problem) = problem {
        context
            .send_notification(
                NotificationType::Error,
                format!("Using default settings: {problem}"),
            )
            .await;
    }

    serve(context, rx, BufReader::new(tokio::io::stdin())).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::Builder::new()
        .name("backend".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    log::error!("Failed to build tokio runtime: {e}");
                    return;
                }
            };
            runtime.block_on(async { setup_backend(rx, tx).await });
        })
        .map(|_| ())
        .unwrap_or_else(|e| log::error!("Failed to spawn backend thread: {e}"));
}
