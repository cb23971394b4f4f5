//! Typed identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Stable identifier of a project card, e.g. `word-rush`.
///
/// Unlike the display title it never changes with presentation and is unique
/// within a catalog, so it is the key for details lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    /// Wrap a raw identifier, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when `raw` is empty or whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if trimmed.len() == raw.len() {
            Ok(Self(raw))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_surrounding_whitespace() {
        let id = ProjectId::new("  word-rush ").unwrap();
        assert_eq!(id.as_str(), "word-rush");
    }

    #[test]
    fn should_return_error_when_id_is_blank() {
        assert_eq!(ProjectId::new("   "), Err(ValidationError::EmptyId));
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = ProjectId::new("bus-watcher").unwrap();
        let parsed: ProjectId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_reject_blank_id_when_deserializing() {
        let result = serde_json::from_str::<ProjectId>("\"\"");
        assert!(result.is_err());
    }
}
