//! Project board: the searchable, sortable grid of project cards.

use folio_domain::arrangement::{self, Arrangement};
use folio_domain::error::{FolioError, NotFoundError, ValidationError};
use folio_domain::id::ProjectId;
use folio_domain::project::ProjectCard;
use folio_domain::search::SearchQuery;
use folio_domain::sort::SortMode;

/// Owns the fixed card set and the current search/sort inputs, and keeps the
/// latest [`Arrangement`] in sync with them.
///
/// Every input change triggers a full recompute over all cards.
pub struct ProjectBoard {
    cards: Vec<ProjectCard>,
    query: SearchQuery,
    mode: SortMode,
    arrangement: Arrangement,
}

impl ProjectBoard {
    /// Build a board over `cards` with an empty query and the default sort.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateId`] when two cards share an id.
    pub fn new(cards: Vec<ProjectCard>) -> Result<Self, FolioError> {
        if let Some(id) = arrangement::duplicate_ids(&cards).into_iter().next() {
            return Err(ValidationError::DuplicateId(id.to_string()).into());
        }
        let query = SearchQuery::default();
        let mode = SortMode::default();
        let arrangement = arrangement::arrange(&cards, &query, mode);
        Ok(Self {
            cards,
            query,
            mode,
            arrangement,
        })
    }

    #[must_use]
    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: &ProjectId) -> Option<&ProjectCard> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Look up a card, failing when the id is not on the board.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NotFound`] for an unknown id.
    pub fn require_card(&self, id: &ProjectId) -> Result<&ProjectCard, FolioError> {
        self.card(id).ok_or_else(|| {
            NotFoundError {
                entity: "Project",
                id: id.to_string(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.mode
    }

    #[must_use]
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Apply the raw contents of the search input.
    #[tracing::instrument(skip(self))]
    pub fn search(&mut self, raw: &str) -> &Arrangement {
        self.query = SearchQuery::new(raw);
        self.refresh()
    }

    /// Apply the raw value of the sort selector.
    #[tracing::instrument(skip(self))]
    pub fn sort_by(&mut self, raw: &str) -> &Arrangement {
        self.mode = SortMode::from_control(raw);
        self.refresh()
    }

    /// Recompute the arrangement from the current inputs.
    pub fn refresh(&mut self) -> &Arrangement {
        self.arrangement = arrangement::arrange(&self.cards, &self.query, self.mode);
        tracing::debug!(
            query = self.query.as_str(),
            mode = %self.mode,
            visible = self.arrangement.visible_count(),
            total = self.cards.len(),
            "project grid arranged"
        );
        &self.arrangement
    }
}
