//! Thin helpers over the parts of the document Leptos does not own.

use folio_domain::theme::{ROOT_ATTRIBUTE, Theme};

/// Set or clear the dark-theme marker on `<html>`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = match theme.root_marker() {
        Some(marker) => root.set_attribute(ROOT_ATTRIBUTE, marker),
        None => root.remove_attribute(ROOT_ATTRIBUTE),
    };
    if let Err(err) = result {
        tracing::warn!(error = ?err, %theme, "failed to update root theme attribute");
    }
}

/// Current vertical scroll offset of the page.
pub fn scroll_offset() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    window.scroll_y().unwrap_or_else(|_| {
        window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |root| f64::from(root.scroll_top()))
    })
}

/// Jump to vertical offset `top`, without animation.
pub fn scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, top);
    }
}
