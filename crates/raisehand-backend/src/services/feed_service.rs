use raisehand_bridge::{MessageFromBackend, notification::NotificationType};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Relays the browser's message feed to the frontend.
///
/// The page's observer script posts one JSON object per message; the
/// embedding browser host writes each of them as a single line. Lines are
/// forwarded untouched, classification happens on the UI thread.
pub async fn relay_feed<R>(context: super::AppContextHandle, reader: R)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                log::trace!("Browser message: {line}");
                if !context
                    .send(MessageFromBackend::BrowserMessage(line.to_owned()))
                    .await
                {
                    break;
                }
            }
            Ok(None) => {
                log::info!("Browser feed reached its end");
                context
                    .send_notification(
                        NotificationType::Info,
                        "The classroom page stopped sending events.",
                    )
                    .await;
                break;
            }
            Err(e) => {
                // a single undecodable line must not end the feed
                log::warn!("Failed to read from the browser feed: {e}");
                if e.kind() != std::io::ErrorKind::InvalidData {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use raisehand_bridge::config::Config;
    use tokio::sync::{RwLock, mpsc};

    use super::*;
    use crate::{app::AppContext, state::State};

    #[tokio::test]
    async fn forwards_non_blank_lines_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let context = Arc::new(AppContext {
            state: Arc::new(RwLock::new(State {
                config: Config::default(),
                config_path: None,
            })),
            tx,
        });

        let feed: &[u8] = b"{\"type\":\"handSnackbar\"}\n\n   \n{\"type\":\"bogus\"}\n";
        relay_feed(context, feed).await;

        let mut forwarded = Vec::new();
        while let Ok(message) = rx.try_recv() {
            if let MessageFromBackend::BrowserMessage(line) = message {
                forwarded.push(line);
            }
        }
        assert_eq!(
            forwarded,
            vec![r#"{"type":"handSnackbar"}"#, r#"{"type":"bogus"}"#]
        );
    }

    #[tokio::test]
    async fn undecodable_line_does_not_end_the_feed() {
        let (tx, mut rx) = mpsc::channel(8);
        let context = Arc::new(AppContext {
            state: Arc::new(RwLock::new(State {
                config: Config::default(),
                config_path: None,
            })),
            tx,
        });

        let feed: &[u8] = b"{\"type\":\"a\"}\n\xff\xfe\n{\"type\":\"b\"}\n";
        relay_feed(context, feed).await;

        let mut forwarded = Vec::new();
        while let Ok(message) = rx.try_recv() {
            if let MessageFromBackend::BrowserMessage(line) = message {
                forwarded.push(line);
            }
        }
        assert_eq!(forwarded, vec![r#"{"type":"a"}"#, r#"{"type":"b"}"#]);
    }
}
