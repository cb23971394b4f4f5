//! Theme switch: light/dark mode and its persistence.

use folio_domain::theme::Theme;

use crate::ports::PreferenceStore;

/// Holds the active [`Theme`] and writes every change through to the store.
pub struct ThemeSwitch<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeSwitch<S> {
    /// Read the stored theme (or `default`) and enter that state.
    #[tracing::instrument(skip(store))]
    pub fn load(store: S, key: &str, default: Theme) -> Self {
        let key = key.to_string();
        let current = store
            .get(&key)
            .map_or(default, |raw| Theme::from_stored(&raw));
        let switch = Self {
            store,
            key,
            current,
        };
        switch.persist();
        tracing::debug!(theme = %current, "theme loaded");
        switch
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.current.glyph()
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    #[tracing::instrument(skip(self))]
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.store.set(&self.key, self.current.code()) {
            tracing::warn!(error = %err, key = %self.key, "failed to persist theme");
        }
    }
}
