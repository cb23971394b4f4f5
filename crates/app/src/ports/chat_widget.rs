//! Chat widget port: loads the third-party chat launcher into the page.

use folio_domain::chat_widget::ChatWidgetOptions;
use folio_domain::error::FolioError;

/// Capability to inject and initialise the chat widget.
///
/// Implementations are opaque external services: the page never depends on
/// whether loading succeeds.
pub trait ChatWidgetLoader: Send + Sync {
    /// Start loading the widget with the given display options.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Widget`] when the widget cannot be injected.
    fn load(&self, options: &ChatWidgetOptions) -> Result<(), FolioError>;
}

/// Loader that does nothing. Used where no widget is wanted and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChatWidget;

impl ChatWidgetLoader for NoopChatWidget {
    fn load(&self, _options: &ChatWidgetOptions) -> Result<(), FolioError> {
        Ok(())
    }
}
