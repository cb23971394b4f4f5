//! Site configuration, embedded from `site.toml` at build time.
//!
//! Every field has a default so the file may be empty. An invalid file is
//! reported and the defaults are used instead.

use folio_app::context::AppSettings;
use folio_domain::chat_widget::ChatWidgetOptions;
use folio_domain::language::Language;
use folio_domain::scroll::{DEFAULT_THRESHOLD, ScrollPolicy};
use folio_domain::theme::Theme;
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../site.toml");

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Preference storage keys.
    pub storage: StorageConfig,
    /// Starting language and theme when nothing is stored.
    pub preferences: PreferencesConfig,
    pub scroll: ScrollConfig,
    /// Third-party chat launcher.
    pub chat_widget: ChatWidgetConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// `localStorage` keys the two preferences live under.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub language_key: String,
    pub theme_key: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub default_language: Language,
    pub default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Vertical offset past which the back-to-top control shows.
    pub back_to_top_threshold: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChatWidgetConfig {
    pub enabled: bool,
    /// URL of the widget script.
    pub script_src: String,
    /// Options passed to the widget's `init`.
    pub options: ChatWidgetOptions,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl SiteConfig {
    /// Parse and validate the configuration compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML is malformed or fails
    /// validation.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(EMBEDDED)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is malformed or fails validation.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let storage = &self.storage;
        if storage.language_key.trim().is_empty() || storage.theme_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "storage keys must not be empty".to_string(),
            ));
        }
        if storage.language_key == storage.theme_key {
            return Err(ConfigError::Validation(
                "language and theme must use different storage keys".to_string(),
            ));
        }
        if !self.scroll.back_to_top_threshold.is_finite() || self.scroll.back_to_top_threshold < 0.0
        {
            return Err(ConfigError::Validation(
                "back_to_top_threshold must be a non-negative number".to_string(),
            ));
        }
        if self.chat_widget.enabled && self.chat_widget.script_src.trim().is_empty() {
            return Err(ConfigError::Validation(
                "chat widget is enabled but script_src is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings handed to the application context.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            language_key: self.storage.language_key.clone(),
            theme_key: self.storage.theme_key.clone(),
            default_language: self.preferences.default_language,
            default_theme: self.preferences.default_theme,
            scroll: ScrollPolicy::new(self.scroll.back_to_top_threshold),
            chat_widget: self
                .chat_widget
                .enabled
                .then(|| self.chat_widget.options.clone()),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            language_key: "portfolio.lang".to_string(),
            theme_key: "portfolio.theme".to_string(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Default for ChatWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script_src: "https://widget.myalice.ai/index.js".to_string(),
            options: ChatWidgetOptions::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure, including unknown language or theme codes.
    #[error("failed to parse site config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
