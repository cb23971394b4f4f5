//! Static bilingual details text and the content shown in the details overlay.

use std::collections::HashMap;

use crate::id::ProjectId;
use crate::language::{Language, Localized};
use crate::project::ProjectCard;

/// Title shown when a card has no readable title.
pub const UNTITLED: &str = "Project";

/// Body shown when no details entry exists for a project.
#[must_use]
pub fn details_unavailable(lang: Language) -> &'static str {
    match lang {
        Language::En => "Details not available.",
        Language::Es => "Detalles no disponibles.",
    }
}

/// Read-only table of details text keyed by project id.
#[derive(Debug, Clone, Default)]
pub struct DetailsCatalog {
    entries: HashMap<ProjectId, Localized<String>>,
}

impl DetailsCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `id`.
    #[must_use]
    pub fn with_entry(mut self, id: ProjectId, text: Localized<String>) -> Self {
        self.entries.insert(id, text);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.entries.contains_key(id)
    }

    /// Details text for `id` in `lang`, or the "not available" placeholder.
    #[must_use]
    pub fn text_for(&self, id: &ProjectId, lang: Language) -> &str {
        self.entries
            .get(id)
            .map_or_else(|| details_unavailable(lang), |entry| entry.get(lang).as_str())
    }
}

impl FromIterator<(ProjectId, Localized<String>)> for DetailsCatalog {
    fn from_iter<I: IntoIterator<Item = (ProjectId, Localized<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// What the details overlay displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub meta: String,
    pub body: String,
}

impl ModalContent {
    /// Resolve the overlay content for `card` in `lang`.
    #[must_use]
    pub fn for_card(card: &ProjectCard, catalog: &DetailsCatalog, lang: Language) -> Self {
        let title = card.title.trim();
        Self {
            title: if title.is_empty() { UNTITLED } else { title }.to_string(),
            meta: card.meta_in(lang).trim().to_string(),
            body: catalog.text_for(&card.id, lang).to_string(),
        }
    }
}
