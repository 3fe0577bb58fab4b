//! Strict decoding of the loosely typed messages posted by the page script.

use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// Message as posted by the DOM observer running inside the hosted page.
///
/// Every field is optional on the wire. Unknown fields are ignored so that
/// newer page scripts do not break older shells.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawMessage {
    /// Tag naming the kind of signal (`handSnackbar`, `chatMessage`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Participant count. Kept as a float because page scripts do not
    /// distinguish integers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    /// Page-side timestamp. Informational only, the pipeline uses its own
    /// clock.
    #[serde(rename = "ts", default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<serde_json::Value>,
}

impl RawMessage {
    /// Decodes a message from the JSON text delivered by the browser.
    ///
    /// Some embedding hosts hand messages over as a JSON string that itself
    /// contains the JSON object, so one level of string wrapping is
    /// unwrapped.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<serde_json::Value>(payload)? {
            serde_json::Value::String(inner) => serde_json::from_str(&inner),
            value => serde_json::from_value(value),
        }
    }
}

/// A typed event derived from exactly one [`RawMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedEvent {
    HandRaise { display_text: String },
    ChatMessage { author: String, body: String },
    ParticipantJoined { count: u32 },
    ParticipantLeft { count: u32 },
    /// Anything the pipeline cannot act on. Carries the original payload for
    /// diagnostics.
    Unrecognized { raw: String },
}

impl ClassifiedEvent {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ClassifiedEvent::Unrecognized { .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ClassifiedEvent::HandRaise { .. } => "hand-raise",
            ClassifiedEvent::ChatMessage { .. } => "chat-message",
            ClassifiedEvent::ParticipantJoined { .. } => "participant-joined",
            ClassifiedEvent::ParticipantLeft { .. } => "participant-left",
            ClassifiedEvent::Unrecognized { .. } => "unrecognized",
        }
    }
}

/// Classifies the JSON text of a browser message. Never fails: payloads that
/// cannot be decoded become [`ClassifiedEvent::Unrecognized`].
pub fn classify_json(payload: &str, language: Language) -> ClassifiedEvent {
    match RawMessage::from_json(payload) {
        Ok(message) => classify_message(message, payload, language),
        Err(e) => {
            log::debug!("Dropping undecodable browser message: {e}");
            ClassifiedEvent::Unrecognized {
                raw: payload.to_owned(),
            }
        }
    }
}

/// Classifies an already decoded message.
pub fn classify(message: RawMessage, language: Language) -> ClassifiedEvent {
    let raw = serde_json::to_string(&message).unwrap_or_default();
    classify_message(message, &raw, language)
}

fn classify_message(message: RawMessage, raw: &str, language: Language) -> ClassifiedEvent {
    let unrecognized = || ClassifiedEvent::Unrecognized {
        raw: raw.to_owned(),
    };

    match message.kind.as_deref() {
        Some("handSnackbar") => {
            let display_text = non_blank(message.text)
                .unwrap_or_else(|| language.hand_raise_fallback().to_owned());
            ClassifiedEvent::HandRaise { display_text }
        }
        Some("chatMessage") => {
            let body = message.text.unwrap_or_default();
            if body.is_empty() {
                return unrecognized();
            }

            let author = non_blank(message.from)
                .unwrap_or_else(|| language.default_chat_author().to_owned());
            ClassifiedEvent::ChatMessage { author, body }
        }
        Some("participantJoined") => ClassifiedEvent::ParticipantJoined {
            count: participant_count(message.count),
        },
        Some("participantLeft") => ClassifiedEvent::ParticipantLeft {
            count: participant_count(message.count),
        },
        _ => unrecognized(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

// missing, negative or non-finite counts are reported as zero
fn participant_count(count: Option<f64>) -> u32 {
    match count {
        Some(count) if count.is_finite() && count >= 0.0 => count.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}
