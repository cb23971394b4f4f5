//! Calendar helpers: project dates and the current year.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Date used whenever a project date is missing or unparseable.
pub const EPOCH: NaiveDate = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date");

/// Return the current UTC time.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar year shown in the page footer.
#[must_use]
pub fn current_year() -> i32 {
    now().year()
}

/// Parse an ISO 8601 calendar date, falling back to [`EPOCH`].
///
/// Accepts `YYYY-MM-DD`, full RFC 3339 timestamps (the date part is kept),
/// `YYYY-MM` (first of the month) and a bare `YYYY` (first of January).
#[must_use]
pub fn parse_date_or_epoch(raw: Option<&str>) -> NaiveDate {
    raw.and_then(parse_date).unwrap_or(EPOCH)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Some((year, month)) = raw.split_once('-') {
        let year = year.parse().ok()?;
        let month = month.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    if raw.len() == 4 {
        return NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1);
    }
    None
}
