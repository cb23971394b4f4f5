//! Sort modes for the project grid and the comparators behind them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::project::ProjectCard;

/// Ordering strategy selected in the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recent first.
    #[default]
    Newest,
    /// Featured first, then most recent first.
    Featured,
    /// Alphabetical by title.
    Az,
}

impl SortMode {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Featured, Self::Az];

    /// Value of the corresponding `<option>`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Featured => "featured",
            Self::Az => "az",
        }
    }

    /// Read the selector's value; anything unrecognised means [`SortMode::Newest`].
    #[must_use]
    pub fn from_control(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Compare two cards under this mode. Equal cards keep their relative
    /// order when used with a stable sort.
    #[must_use]
    pub fn compare(self, a: &ProjectCard, b: &ProjectCard) -> Ordering {
        match self {
            Self::Newest => b.sort_date().cmp(&a.sort_date()),
            Self::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.sort_date().cmp(&a.sort_date())),
            Self::Az => collate(a.search_title(), b.search_title()),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "featured" => Ok(Self::Featured),
            "az" => Ok(Self::Az),
            other => Err(ValidationError::UnknownSortMode(other.to_string())),
        }
    }
}

/// Locale-aware string comparison for Latin scripts.
///
/// Letters compare by their base form first (`á` sorts with `a`, `ñ` with
/// `n`), and only strings that are equal after folding fall back to a plain
/// code point comparison.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(fold_accent)
        .cmp(b.chars().map(fold_accent))
        .then_with(|| a.cmp(b))
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ñ' | 'Ñ' => 'n',
        'ç' | 'Ç' => 'c',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, date: Option<&str>, featured: bool) -> ProjectCard {
        ProjectCard::builder()
            .title(title)
            .maybe_date(date.map(str::to_string))
            .featured(featured)
            .build()
            .unwrap()
    }

    #[test]
    fn should_fall_back_to_newest_for_unknown_control_value() {
        assert_eq!(SortMode::from_control("popular"), SortMode::Newest);
        assert_eq!(SortMode::from_control(""), SortMode::Newest);
        assert_eq!(SortMode::from_control("az"), SortMode::Az);
    }

    #[test]
    fn should_order_newest_first() {
        let old = card("Old", Some("2020-05-01"), false);
        let new = card("New", Some("2024-05-01"), false);
        assert_eq!(SortMode::Newest.compare(&new, &old), Ordering::Less);
    }

    #[test]
    fn should_put_featured_before_newer_non_featured() {
        let a = card("A", Some("2022-01-01"), true);
        let b = card("B", Some("2024-01-01"), false);
        assert_eq!(SortMode::Featured.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn should_break_featured_ties_by_date() {
        let a = card("A", Some("2021-01-01"), true);
        let b = card("B", Some("2023-01-01"), true);
        assert_eq!(SortMode::Featured.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn should_collate_accents_with_base_letter() {
        assert_eq!(collate("árbol", "banco"), Ordering::Less);
        assert_eq!(collate("ñandu", "oso"), Ordering::Less);
        assert_eq!(collate("a", "á"), Ordering::Less);
        assert_eq!(collate("mishka", "mishka"), Ordering::Equal);
    }

    #[test]
    fn should_display_control_value() {
        assert_eq!(SortMode::Featured.to_string(), "featured");
    }
}
