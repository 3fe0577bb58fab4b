use serde::{Deserialize, Serialize};

/// Language of the hosted classroom page, which also selects the wording of
/// generated notification texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "el")]
    Greek,
}

impl Language {
    /// Short language code used by the classroom site.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Greek => "el",
        }
    }

    /// Text shown for a hand-raise snackbar that carried no text.
    pub fn hand_raise_fallback(self) -> &'static str {
        match self {
            Language::English => "A student raised their hand.",
            Language::Greek => "Ένας μαθητής σήκωσε το χέρι του.",
        }
    }

    /// Author shown for chat messages without a sender.
    pub fn default_chat_author(self) -> &'static str {
        match self {
            Language::English => "Student",
            Language::Greek => "Μαθητής",
        }
    }

    pub fn participant_joined(self) -> &'static str {
        match self {
            Language::English => "A participant joined the call.",
            Language::Greek => "Ένας συμμετέχων συνδέθηκε στην κλήση.",
        }
    }

    pub fn participant_left(self) -> &'static str {
        match self {
            Language::English => "A participant left the call.",
            Language::Greek => "Ένας συμμετέχων αποχώρησε από την κλήση.",
        }
    }
}
