//! Free-text search over project cards.

use crate::project::ProjectCard;

/// Normalised search query: trimmed and lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match against the card's title or its full
    /// text. An empty query matches every card.
    #[must_use]
    pub fn matches(&self, card: &ProjectCard) -> bool {
        self.is_empty()
            || card.search_title().contains(self.as_str())
            || card.search_text().contains(self.as_str())
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Localized;

    fn card(title: &str, summary: &str) -> ProjectCard {
        ProjectCard::builder()
            .title(title)
            .summary(Localized::new(summary.to_string(), String::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn should_normalise_case_and_whitespace() {
        assert_eq!(SearchQuery::new("  WoRd \n").as_str(), "word");
    }

    #[test]
    fn should_match_everything_when_query_is_empty() {
        let query = SearchQuery::new("   ");
        assert!(query.is_empty());
        assert!(query.matches(&card("Mishka", "events")));
    }

    #[test]
    fn should_match_title_substring_case_insensitively() {
        assert!(SearchQuery::new("RUSH").matches(&card("Word Rush", "")));
    }

    #[test]
    fn should_match_body_text_when_title_does_not() {
        assert!(SearchQuery::new("booking").matches(&card("Mishka", "MERN Booking platform")));
    }

    #[test]
    fn should_not_tokenize_query() {
        assert!(!SearchQuery::new("rush word").matches(&card("Word Rush", "")));
    }
}
