//! Project catalog embedded from `catalog.toml`.

use folio_domain::arrangement;
use folio_domain::details::DetailsCatalog;
use folio_domain::error::{FolioError, ValidationError};
use folio_domain::id::ProjectId;
use folio_domain::language::Localized;
use folio_domain::project::ProjectCard;
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../catalog.toml");

/// Cards in render order plus their details text.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub cards: Vec<ProjectCard>,
    pub details: DetailsCatalog,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    project: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: String,
    title: String,
    date: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    meta: Localized<String>,
    #[serde(default)]
    summary: Localized<String>,
    details: Option<Localized<String>>,
}

impl ProjectRecord {
    fn into_parts(self) -> Result<(ProjectCard, Option<Localized<String>>), FolioError> {
        let card = ProjectCard::builder()
            .id(ProjectId::new(self.id)?)
            .title(self.title)
            .maybe_date(self.date)
            .featured(self.featured)
            .tags(self.tags)
            .meta(self.meta)
            .summary(self.summary)
            .build()?;
        Ok((card, self.details))
    }
}

impl Catalog {
    /// Parse the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// See [`Catalog::parse`].
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse(EMBEDDED)
    }

    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML and
    /// [`CatalogError::Invalid`] for an empty id or title or a repeated id.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut cards = Vec::with_capacity(file.project.len());
        let mut details = DetailsCatalog::new();
        for record in file.project {
            let (card, text) = record.into_parts()?;
            if let Some(text) = text {
                details = details.with_entry(card.id.clone(), text);
            }
            cards.push(card);
        }
        if let Some(id) = arrangement::duplicate_ids(&cards).into_iter().next() {
            return Err(FolioError::from(ValidationError::DuplicateId(id.to_string())).into());
        }
        tracing::debug!(cards = cards.len(), details = details.len(), "catalog loaded");
        Ok(Self { cards, details })
    }
}

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse project catalog")]
    Parse(#[from] toml::de::Error),
    #[error("invalid project catalog")]
    Invalid(#[from] FolioError),
}
