//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FolioError`]
//! via `#[from]` or an explicit `into_domain` so port boundaries only ever
//! speak one error type.

/// Top-level error for every fallible operation in folio.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Failure in the preference storage backend.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Failure while loading or initialising the chat widget.
    #[error("chat widget error")]
    Widget(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("project title must not be empty")]
    EmptyTitle,

    #[error("project id must not be empty")]
    EmptyId,

    #[error("duplicate project id: {0}")]
    DuplicateId(String),

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: FolioError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Project",
            id: "word-rush".to_string(),
        };
        assert_eq!(err.to_string(), "Project word-rush not found");
    }

    #[test]
    fn should_display_duplicate_id() {
        let err = ValidationError::DuplicateId("mishka".to_string());
        assert_eq!(err.to_string(), "duplicate project id: mishka");
    }
}
