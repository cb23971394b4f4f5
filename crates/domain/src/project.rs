//! Project card: one portfolio item shown in the project grid.

use chrono::NaiveDate;

use crate::error::{FolioError, ValidationError};
use crate::id::ProjectId;
use crate::language::{Language, Localized};
use crate::time::{self, EPOCH};

/// A single portfolio project.
///
/// Cards are fixed for the lifetime of the page; only their visibility and
/// position are ever recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    /// Raw date as written in the catalog, if any.
    pub date: Option<String>,
    pub featured: bool,
    pub meta: Localized<String>,
    pub summary: Localized<String>,
    pub tags: Vec<String>,
    search_title: String,
    search_text: String,
    sort_date: NaiveDate,
}

impl ProjectCard {
    /// Create a builder for constructing a [`ProjectCard`].
    #[must_use]
    pub fn builder() -> ProjectCardBuilder {
        ProjectCardBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] when `title` is blank.
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }

    /// Date used for ordering; missing or unparseable dates are the epoch.
    #[must_use]
    pub fn sort_date(&self) -> NaiveDate {
        self.sort_date
    }

    /// Lower-cased title, the primary key for alphabetical ordering.
    #[must_use]
    pub fn search_title(&self) -> &str {
        &self.search_title
    }

    /// Lower-cased concatenation of everything a visitor can read on the card,
    /// in both languages.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Meta line in the given language.
    #[must_use]
    pub fn meta_in(&self, lang: Language) -> &str {
        self.meta.get(lang)
    }

    /// Value of the `data-featured` attribute.
    #[must_use]
    pub fn featured_flag(&self) -> &'static str {
        if self.featured { "1" } else { "0" }
    }

    fn index(&mut self) {
        self.search_title = self.title.to_lowercase();
        let mut text = self.title.clone();
        for part in self.meta.iter().chain(self.summary.iter()).chain(&self.tags) {
            text.push(' ');
            text.push_str(part);
        }
        self.search_text = text.to_lowercase();
        self.sort_date = time::parse_date_or_epoch(self.date.as_deref());
    }
}

/// Step-by-step builder for [`ProjectCard`].
#[derive(Debug, Default)]
pub struct ProjectCardBuilder {
    id: Option<ProjectId>,
    title: Option<String>,
    date: Option<String>,
    featured: bool,
    meta: Localized<String>,
    summary: Localized<String>,
    tags: Vec<String>,
}

impl ProjectCardBuilder {
    #[must_use]
    pub fn id(mut self, id: ProjectId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn maybe_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    #[must_use]
    pub fn meta(mut self, meta: Localized<String>) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn summary(mut self, summary: Localized<String>) -> Self {
        self.summary = summary;
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Consume the builder, validate, and return a [`ProjectCard`].
    ///
    /// When no id is given one is derived from the title.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] if the title is missing or blank.
    pub fn build(self) -> Result<ProjectCard, FolioError> {
        let title = self.title.unwrap_or_default();
        let id = match self.id {
            Some(id) => id,
            None => ProjectId::new(slugify(&title)).map_err(|_| ValidationError::EmptyTitle)?,
        };
        let mut card = ProjectCard {
            id,
            title,
            date: self.date,
            featured: self.featured,
            meta: self.meta,
            summary: self.summary,
            tags: self.tags,
            search_title: String::new(),
            search_text: String::new(),
            sort_date: EPOCH,
        };
        card.validate()?;
        card.index();
        Ok(card)
    }
}

/// Lower-case, dash-separated identifier derived from a title.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_rush() -> ProjectCard {
        ProjectCard::builder()
            .title("Word Rush")
            .date("2024-01-01")
            .featured(true)
            .meta(Localized::new(
                "React Native · AI".to_string(),
                "React Native · IA".to_string(),
            ))
            .summary(Localized::new(
                "Quick word puzzles".to_string(),
                "Acertijos rápidos".to_string(),
            ))
            .tags(vec!["Mobile".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn should_derive_id_from_title_when_missing() {
        assert_eq!(word_rush().id.as_str(), "word-rush");
    }

    #[test]
    fn should_return_validation_error_when_title_is_blank() {
        let result = ProjectCard::builder().title("   ").build();
        assert!(matches!(
            result,
            Err(FolioError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[test]
    fn should_index_both_languages_and_tags_for_search() {
        let card = word_rush();
        assert!(card.search_text().contains("acertijos"));
        assert!(card.search_text().contains("quick word"));
        assert!(card.search_text().contains("mobile"));
        assert_eq!(card.search_title(), "word rush");
    }

    #[test]
    fn should_use_epoch_when_date_is_missing() {
        let card = ProjectCard::builder().title("NewtonRoids").build().unwrap();
        assert_eq!(card.sort_date(), EPOCH);
        assert_eq!(card.featured_flag(), "0");
    }

    #[test]
    fn should_pick_meta_line_for_language() {
        let card = word_rush();
        assert_eq!(card.meta_in(Language::Es), "React Native · IA");
    }

    #[test]
    fn should_slugify_punctuation_and_spaces() {
        assert_eq!(slugify("Thovarisk Web Games"), "thovarisk-web-games");
        assert_eq!(slugify("C#/.NET  Watcher!"), "c-net-watcher");
    }
}
