//! Chat widget bootstrap: loads the chat launcher once, on the first scroll.

use folio_domain::chat_widget::ChatWidgetOptions;

use crate::ports::ChatWidgetLoader;

/// Fires the [`ChatWidgetLoader`] at most once per page lifetime.
pub struct ChatBootstrap<W> {
    loader: W,
    options: Option<ChatWidgetOptions>,
    requested: bool,
}

impl<W: ChatWidgetLoader> ChatBootstrap<W> {
    /// `options` of `None` disables the widget entirely.
    pub fn new(loader: W, options: Option<ChatWidgetOptions>) -> Self {
        Self {
            loader,
            options,
            requested: false,
        }
    }

    /// Handle a scroll event. Returns `true` only for the call that triggered
    /// the load.
    pub fn on_scroll(&mut self) -> bool {
        if self.requested {
            return false;
        }
        let Some(options) = &self.options else {
            return false;
        };
        self.requested = true;
        match self.loader.load(options) {
            Ok(()) => tracing::debug!(selector = %options.selector, "chat widget requested"),
            Err(err) => tracing::warn!(error = %err, "chat widget failed to load"),
        }
        true
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::error::FolioError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl ChatWidgetLoader for CountingLoader {
        fn load(&self, _options: &ChatWidgetOptions) -> Result<(), FolioError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FolioError::Widget(Box::new(std::io::Error::other(
                    "script blocked",
                ))));
            }
            Ok(())
        }
    }

    #[test]
    fn should_load_exactly_once_across_many_scrolls() {
        let loader = CountingLoader::default();
        let mut bootstrap =
            ChatBootstrap::new(loader.clone(), Some(ChatWidgetOptions::default()));

        assert!(bootstrap.on_scroll());
        for _ in 0..10 {
            assert!(!bootstrap.on_scroll());
        }
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
        assert!(bootstrap.is_requested());
    }

    #[test]
    fn should_never_load_when_disabled() {
        let loader = CountingLoader::default();
        let mut bootstrap = ChatBootstrap::new(loader.clone(), None);

        assert!(!bootstrap.on_scroll());
        assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn should_not_retry_after_failure() {
        let loader = CountingLoader {
            fail: true,
            ..CountingLoader::default()
        };
        let mut bootstrap =
            ChatBootstrap::new(loader.clone(), Some(ChatWidgetOptions::default()));

        bootstrap.on_scroll();
        bootstrap.on_scroll();
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }
}
