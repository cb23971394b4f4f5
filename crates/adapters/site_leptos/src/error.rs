//! Browser adapter error types.

use folio_domain::error::FolioError;
use wasm_bindgen::JsValue;

/// Errors raised while talking to browser APIs.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    /// `localStorage` is disabled or blocked for this origin.
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// A browser API threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl BrowserError {
    /// Convert into a [`FolioError::Storage`] for the preference store port.
    pub fn into_storage(self) -> FolioError {
        FolioError::Storage(Box::new(self))
    }

    /// Convert into a [`FolioError::Widget`] for the chat widget port.
    pub fn into_widget(self) -> FolioError {
        FolioError::Widget(Box::new(self))
    }
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_storage_unavailable() {
        assert_eq!(
            BrowserError::StorageUnavailable.to_string(),
            "local storage unavailable"
        );
    }

    #[test]
    fn should_convert_into_storage_error() {
        let err = BrowserError::NoWindow.into_storage();
        assert!(matches!(err, FolioError::Storage(_)));
    }

    #[test]
    fn should_convert_into_widget_error() {
        let err = BrowserError::Js("blocked".to_string()).into_widget();
        assert!(matches!(err, FolioError::Widget(_)));
    }
}
