//! Language switch: the page's active display language and its persistence.

use folio_domain::language::Language;

use crate::ports::PreferenceStore;

/// Holds the active [`Language`] and writes every change through to the store.
pub struct LanguageSwitch<S> {
    store: S,
    key: String,
    current: Language,
}

impl<S: PreferenceStore> LanguageSwitch<S> {
    /// Read the stored language (or `default`) and enter that state.
    ///
    /// Entering the initial state persists it, so a legacy or corrupted
    /// stored value is rewritten in its canonical form.
    #[tracing::instrument(skip(store))]
    pub fn load(store: S, key: &str, default: Language) -> Self {
        let key = key.to_string();
        let current = store
            .get(&key)
            .map_or(default, |raw| Language::from_stored(&raw, default));
        let switch = Self {
            store,
            key,
            current,
        };
        switch.persist();
        tracing::debug!(language = %current, "language loaded");
        switch
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    /// Whether elements tagged for `tag` are shown in the current state.
    #[must_use]
    pub fn is_shown(&self, tag: Language) -> bool {
        self.current == tag
    }

    /// Label for the toggle control.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.current.label()
    }

    /// Flip between English and Spanish, returning the new language.
    pub fn toggle(&mut self) -> Language {
        self.set(self.current.toggled());
        self.current
    }

    /// Enter `language` and persist it.
    #[tracing::instrument(skip(self))]
    pub fn set(&mut self, language: Language) {
        self.current = language;
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.store.set(&self.key, self.current.code()) {
            tracing::warn!(error = %err, key = %self.key, "failed to persist language");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MemoryPreferenceStore;
    use folio_domain::error::FolioError;

    const KEY: &str = "portfolio.lang";

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), FolioError> {
            Err(FolioError::Storage(Box::new(std::io::Error::other(
                "quota exceeded",
            ))))
        }
    }

    #[test]
    fn should_default_to_english_when_nothing_is_stored() {
        let store = MemoryPreferenceStore::new();
        let switch = LanguageSwitch::load(store.clone(), KEY, Language::En);
        assert_eq!(switch.current(), Language::En);
        assert_eq!(switch.label(), "EN");
        assert_eq!(store.get(KEY).as_deref(), Some("en"));
    }

    #[test]
    fn should_restore_stored_language() {
        let store = MemoryPreferenceStore::new().with_value(KEY, "es");
        let switch = LanguageSwitch::load(store, KEY, Language::En);
        assert_eq!(switch.current(), Language::Es);
        assert!(switch.is_shown(Language::Es));
        assert!(!switch.is_shown(Language::En));
    }

    #[test]
    fn should_rewrite_legacy_value_in_canonical_form() {
        let store = MemoryPreferenceStore::new().with_value(KEY, "espanol");
        let switch = LanguageSwitch::load(store.clone(), KEY, Language::En);
        assert_eq!(switch.current(), Language::Es);
        assert_eq!(store.get(KEY).as_deref(), Some("es"));
    }

    #[test]
    fn should_persist_each_toggle() {
        let store = MemoryPreferenceStore::new();
        let mut switch = LanguageSwitch::load(store.clone(), KEY, Language::En);

        assert_eq!(switch.toggle(), Language::Es);
        assert_eq!(store.get(KEY).as_deref(), Some("es"));

        assert_eq!(switch.toggle(), Language::En);
        assert_eq!(store.get(KEY).as_deref(), Some("en"));
    }

    #[test]
    fn should_still_switch_when_persisting_fails() {
        let mut switch = LanguageSwitch::load(BrokenStore, KEY, Language::En);
        assert_eq!(switch.toggle(), Language::Es);
        assert_eq!(switch.label(), "ES");
    }
}
