//! Application context: every piece of page state, built once at startup.
//!
//! UI handlers receive the context explicitly instead of reaching for
//! module-level globals.

use folio_domain::arrangement::Arrangement;
use folio_domain::chat_widget::ChatWidgetOptions;
use folio_domain::details::{DetailsCatalog, ModalContent};
use folio_domain::error::FolioError;
use folio_domain::id::ProjectId;
use folio_domain::language::Language;
use folio_domain::project::ProjectCard;
use folio_domain::scroll::ScrollPolicy;
use folio_domain::theme::Theme;

use crate::ports::{ChatWidgetLoader, PreferenceStore};
use crate::services::chat_bootstrap::ChatBootstrap;
use crate::services::details_service::DetailsService;
use crate::services::language_switch::LanguageSwitch;
use crate::services::project_board::ProjectBoard;
use crate::services::scroll_to_top::ScrollToTop;
use crate::services::theme_switch::ThemeSwitch;

/// Knobs the composition root reads from configuration.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub language_key: String,
    pub theme_key: String,
    pub default_language: Language,
    pub default_theme: Theme,
    pub scroll: ScrollPolicy,
    /// `None` disables the chat widget.
    pub chat_widget: Option<ChatWidgetOptions>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language_key: "portfolio.lang".to_string(),
            theme_key: "portfolio.theme".to_string(),
            default_language: Language::En,
            default_theme: Theme::Light,
            scroll: ScrollPolicy::default(),
            chat_widget: Some(ChatWidgetOptions::default()),
        }
    }
}

/// What a scroll event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    pub show_back_to_top: bool,
    pub chat_widget_requested: bool,
}

/// Page state and use-cases, generic over the preference store `S` and the
/// chat widget loader `W`.
pub struct AppContext<S, W> {
    language: LanguageSwitch<S>,
    theme: ThemeSwitch<S>,
    scroll: ScrollToTop,
    chat: ChatBootstrap<W>,
    board: ProjectBoard,
    details: DetailsService,
}

impl<S, W> AppContext<S, W>
where
    S: PreferenceStore + Clone,
    W: ChatWidgetLoader,
{
    /// Read stored preferences, enter their states, and arrange the grid.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] when the card set is inconsistent
    /// (duplicate ids).
    #[tracing::instrument(skip_all, fields(cards = cards.len()))]
    pub fn new(
        store: S,
        widget: W,
        settings: AppSettings,
        cards: Vec<ProjectCard>,
        details: DetailsCatalog,
    ) -> Result<Self, FolioError> {
        let board = ProjectBoard::new(cards)?;
        let language = LanguageSwitch::load(
            store.clone(),
            &settings.language_key,
            settings.default_language,
        );
        let theme = ThemeSwitch::load(store, &settings.theme_key, settings.default_theme);
        tracing::info!(
            language = %language.current(),
            theme = %theme.current(),
            details = details.len(),
            "page context ready"
        );
        Ok(Self {
            language,
            theme,
            scroll: ScrollToTop::new(settings.scroll),
            chat: ChatBootstrap::new(widget, settings.chat_widget),
            board,
            details: DetailsService::new(details),
        })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language.current()
    }

    /// Whether elements tagged for `tag` are currently shown.
    #[must_use]
    pub fn is_language_shown(&self, tag: Language) -> bool {
        self.language.is_shown(tag)
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language.toggle()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    /// Handle a scroll event at vertical `offset`.
    pub fn on_scroll(&mut self, offset: f64) -> ScrollOutcome {
        ScrollOutcome {
            show_back_to_top: self.scroll.on_scroll(offset),
            chat_widget_requested: self.chat.on_scroll(),
        }
    }

    /// Offset to jump to when the back-to-top control is clicked.
    #[must_use]
    pub fn back_to_top(&self) -> f64 {
        self.scroll.on_click()
    }

    #[must_use]
    pub fn board(&self) -> &ProjectBoard {
        &self.board
    }

    #[must_use]
    pub fn arrangement(&self) -> &Arrangement {
        self.board.arrangement()
    }

    pub fn search(&mut self, raw: &str) -> &Arrangement {
        self.board.search(raw)
    }

    pub fn sort_by(&mut self, raw: &str) -> &Arrangement {
        self.board.sort_by(raw)
    }

    /// Overlay content for card `id`, in the current language.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NotFound`] when `id` is not on the board.
    pub fn open_details(&self, id: &ProjectId) -> Result<ModalContent, FolioError> {
        self.details.open(&self.board, id, self.language.current())
    }
}
