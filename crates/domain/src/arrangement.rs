//! Filter/sort engine for the project grid.
//!
//! One pass takes the complete, fixed set of cards plus the current query and
//! sort mode, and produces an [`Arrangement`]: which cards are shown and in
//! what order. The pass is a pure function, so re-running it with unchanged
//! inputs always yields the same result.

use std::collections::HashSet;

use crate::id::ProjectId;
use crate::project::ProjectCard;
use crate::search::SearchQuery;
use crate::sort::SortMode;

/// Outcome of one filter/sort pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arrangement {
    visible: Vec<ProjectId>,
    hidden: Vec<ProjectId>,
}

impl Arrangement {
    /// Visible cards, in display order.
    #[must_use]
    pub fn visible(&self) -> &[ProjectId] {
        &self.visible
    }

    /// Filtered-out cards, in catalog order.
    #[must_use]
    pub fn hidden(&self) -> &[ProjectId] {
        &self.hidden
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_visible(&self, id: &ProjectId) -> bool {
        self.visible.contains(id)
    }

    /// Every card: visible ones in sorted order, then hidden ones.
    pub fn order(&self) -> impl Iterator<Item = &ProjectId> {
        self.visible.iter().chain(&self.hidden)
    }
}

/// Filter `cards` by `query`, then stably sort the survivors by `mode`.
#[must_use]
pub fn arrange(cards: &[ProjectCard], query: &SearchQuery, mode: SortMode) -> Arrangement {
    let (mut shown, hidden): (Vec<&ProjectCard>, Vec<&ProjectCard>) =
        cards.iter().partition(|card| query.matches(card));

    shown.sort_by(|a, b| mode.compare(a, b));

    Arrangement {
        visible: shown.into_iter().map(|card| card.id.clone()).collect(),
        hidden: hidden.into_iter().map(|card| card.id.clone()).collect(),
    }
}

/// Ids that appear more than once in `cards`.
#[must_use]
pub fn duplicate_ids(cards: &[ProjectCard]) -> Vec<ProjectId> {
    let mut seen = HashSet::new();
    cards
        .iter()
        .filter(|card| !seen.insert(&card.id))
        .map(|card| card.id.clone())
        .collect()
}
