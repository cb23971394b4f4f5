//! Details service: resolves what the details overlay shows for a card.

use folio_domain::details::{DetailsCatalog, ModalContent};
use folio_domain::error::FolioError;
use folio_domain::id::ProjectId;
use folio_domain::language::Language;

use crate::services::project_board::ProjectBoard;

/// Looks up static details text for cards on a [`ProjectBoard`].
pub struct DetailsService {
    catalog: DetailsCatalog,
}

impl DetailsService {
    pub fn new(catalog: DetailsCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &DetailsCatalog {
        &self.catalog
    }

    /// Build the overlay content for the card `id` in `lang`.
    ///
    /// A card without a details entry gets the "not available" placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NotFound`] when `id` is not on the board.
    #[tracing::instrument(skip(self, board))]
    pub fn open(
        &self,
        board: &ProjectBoard,
        id: &ProjectId,
        lang: Language,
    ) -> Result<ModalContent, FolioError> {
        let card = board.require_card(id)?;
        if !self.catalog.contains(id) {
            tracing::debug!(project = %id, "no details entry, using placeholder");
        }
        Ok(ModalContent::for_card(card, &self.catalog, lang))
    }
}
