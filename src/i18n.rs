use serde::{Deserialize, Serialize};

/// The two site languages. German is the default for first-time visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    De,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
        }
    }

    /// Parse a language code; anything unrecognized falls back to German.
    pub fn from_code(code: &str) -> Lang {
        match code {
            "en" => Lang::En,
            _ => Lang::De,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::De
    }
}

/// A text value stored once per language. Serializes as `{"de": .., "en": ..}`,
/// so every bilingual field in the content document keeps two parallel
/// attributes without any dynamic key construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bilingual {
    pub de: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(de: &str, en: &str) -> Self {
        Self {
            de: de.to_string(),
            en: en.to_string(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::De => &self.de,
            Lang::En => &self.en,
        }
    }
}
