//! Display language of the page and bilingual text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Language the page is currently displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Every supported language, in toggle order.
    pub const ALL: [Self; 2] = [Self::En, Self::Es];

    /// Short code used for storage and as the CSS tag class (`en`, `es`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Label shown on the toggle control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
        }
    }

    /// The language a toggle click switches to.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }

    /// Interpret a raw stored value, tolerating anything.
    ///
    /// Accepts the current codes plus the `english`/`espanol` values written
    /// by older versions of the page. Anything else yields `fallback`.
    #[must_use]
    pub fn from_stored(value: &str, fallback: Self) -> Self {
        match value.trim() {
            "en" | "english" => Self::En,
            "es" | "espanol" => Self::Es,
            _ => fallback,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            other => Err(ValidationError::UnknownLanguage(other.to_string())),
        }
    }
}

/// A pair of texts, one per supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub es: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, es: T) -> Self {
        Self { en, es }
    }

    /// Pick the variant for `lang`.
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }

    /// Iterate over both variants, English first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.en, &self.es].into_iter()
    }
}
