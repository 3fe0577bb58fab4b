use crate::{classifier::ClassifiedEvent, host::SurfaceContent, locale::Language};

/// Renders an event to the content of its toast. The rendered text doubles
/// as the deduplication key.
///
/// Returns `None` for [`ClassifiedEvent::Unrecognized`], which never becomes
/// a toast.
pub fn render(event: &ClassifiedEvent, language: Language) -> Option<SurfaceContent> {
    let content = match event {
        ClassifiedEvent::HandRaise { display_text } => SurfaceContent {
            text: display_text.clone(),
            emoji: true,
        },
        ClassifiedEvent::ChatMessage { author, body } => SurfaceContent {
            text: format!("{author}:\n{body}"),
            emoji: false,
        },
        ClassifiedEvent::ParticipantJoined { .. } => SurfaceContent {
            text: language.participant_joined().to_owned(),
            emoji: false,
        },
        ClassifiedEvent::ParticipantLeft { .. } => SurfaceContent {
            text: language.participant_left().to_owned(),
            emoji: false,
        },
        ClassifiedEvent::Unrecognized { .. } => return None,
    };

    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_recognized_kind() {
        let cases = [
            (
                ClassifiedEvent::HandRaise {
                    display_text: "Maria raised their hand.".into(),
                },
                "Maria raised their hand.",
                true,
            ),
            (
                ClassifiedEvent::ChatMessage {
                    author: "Nikos".into(),
                    body: "Can you repeat that?".into(),
                },
                "Nikos:\nCan you repeat that?",
                false,
            ),
            (
                ClassifiedEvent::ParticipantJoined { count: 4 },
                "A participant joined the call.",
                false,
            ),
            (
                ClassifiedEvent::ParticipantLeft { count: 3 },
                "A participant left the call.",
                false,
            ),
        ];

        for (event, text, emoji) in cases {
            let content = render(&event, Language::English).expect("event should render");
            assert_eq!(content.text, text);
            assert_eq!(content.emoji, emoji);
        }
    }

    #[test]
    fn unrecognized_does_not_render() {
        let event = ClassifiedEvent::Unrecognized {
            raw: "{}".into(),
        };
        assert!(render(&event, Language::English).is_none());
    }

    #[test]
    fn participant_texts_follow_language() {
        let content = render(&ClassifiedEvent::ParticipantLeft { count: 1 }, Language::Greek)
            .expect("event should render");
        assert_eq!(content.text, "Ένας συμμετέχων αποχώρησε από την κλήση.");
    }
}
