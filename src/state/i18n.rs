use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "fr")]
    Fr,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Fr]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

/// msgid → msgstr table of one translated language. English has none: its
/// text is the msgid.
#[derive(Debug, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            messages: serde_json::from_str(source)?,
        })
    }

    /// An empty msgstr means "not translated yet", same as a missing entry.
    pub fn translate<'a>(&'a self, msgid: &'a str) -> &'a str {
        match self.messages.get(msgid) {
            Some(msgstr) if !msgstr.is_empty() => msgstr,
            _ => msgid,
        }
    }

    pub fn msgids(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

pub fn gettext(language: Language, msgid: &'static str) -> &'static str {
    match catalog(language) {
        Some(catalog) => catalog.translate(msgid),
        None => msgid,
    }
}

pub fn catalog(language: Language) -> Option<&'static Catalog> {
    match language {
        Language::En => None,
        Language::Fr => Some(
            FR_CATALOG.get_or_init(|| load(language, include_str!("../../assets/i18n/fr.json"))),
        ),
    }
}

fn load(language: Language, source: &str) -> Catalog {
    Catalog::parse(source).unwrap_or_else(|err| {
        warn!(language = language.code(), error = %err, "unreadable catalog, showing msgids");
        Catalog::default()
    })
}

static FR_CATALOG: OnceLock<Catalog> = OnceLock::new();
