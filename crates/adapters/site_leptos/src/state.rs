//! Reactive handle over the application context, shared through Leptos
//! context.

use folio_app::context::AppContext;
use folio_domain::arrangement::Arrangement;
use folio_domain::details::ModalContent;
use folio_domain::id::ProjectId;
use folio_domain::language::Language;
use folio_domain::project::ProjectCard;
use folio_domain::theme::Theme;
use leptos::prelude::*;

use crate::chat_widget::MyAliceWidget;
use crate::dom;
use crate::storage::LocalStoragePreferences;

/// The context as wired for the browser.
pub type SiteContext = AppContext<LocalStoragePreferences, MyAliceWidget>;

/// Copyable page state. The context owns the logic; the signals mirror what
/// the view reads.
#[derive(Clone, Copy)]
pub struct SiteState {
    context: StoredValue<SiteContext>,
    pub language: RwSignal<Language>,
    pub theme: RwSignal<Theme>,
    pub arrangement: RwSignal<Arrangement>,
    pub show_back_to_top: RwSignal<bool>,
    pub modal: RwSignal<Option<ModalContent>>,
}

impl SiteState {
    pub fn new(context: SiteContext) -> Self {
        let language = RwSignal::new(context.language());
        let theme = RwSignal::new(context.theme());
        let arrangement = RwSignal::new(context.arrangement().clone());
        Self {
            context: StoredValue::new(context),
            language,
            theme,
            arrangement,
            show_back_to_top: RwSignal::new(false),
            modal: RwSignal::new(None),
        }
    }

    /// Reactive: whether elements tagged `tag` are shown.
    pub fn is_shown(&self, tag: Language) -> bool {
        self.language.track();
        self.context
            .try_with_value(|ctx| ctx.is_language_shown(tag))
            .unwrap_or(false)
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.context
            .try_with_value(|ctx| ctx.board().cards().to_vec())
            .unwrap_or_default()
    }

    pub fn toggle_language(&self) {
        if let Some(lang) = self.context.try_update_value(SiteContext::toggle_language) {
            self.language.set(lang);
        }
    }

    pub fn toggle_theme(&self) {
        if let Some(theme) = self.context.try_update_value(SiteContext::toggle_theme) {
            self.theme.set(theme);
        }
    }

    pub fn search(&self, raw: &str) {
        if let Some(next) = self
            .context
            .try_update_value(|ctx| ctx.search(raw).clone())
        {
            self.arrangement.set(next);
        }
    }

    pub fn sort_by(&self, raw: &str) {
        if let Some(next) = self
            .context
            .try_update_value(|ctx| ctx.sort_by(raw).clone())
        {
            self.arrangement.set(next);
        }
    }

    /// Feed the current scroll offset through the context. Loading the chat
    /// widget happens inside the context on the first call.
    pub fn on_scroll(&self) {
        let offset = dom::scroll_offset();
        let Some(outcome) = self.context.try_update_value(|ctx| ctx.on_scroll(offset)) else {
            return;
        };
        if self.show_back_to_top.get_untracked() != outcome.show_back_to_top {
            self.show_back_to_top.set(outcome.show_back_to_top);
        }
    }

    pub fn back_to_top(&self) {
        if let Some(top) = self.context.try_with_value(SiteContext::back_to_top) {
            dom::scroll_to(top);
        }
    }

    pub fn open_details(&self, id: &ProjectId) {
        match self.context.try_with_value(|ctx| ctx.open_details(id)) {
            Some(Ok(content)) => self.modal.set(Some(content)),
            Some(Err(err)) => tracing::warn!(error = %err, %id, "cannot open details"),
            None => {}
        }
    }

    pub fn close_details(&self) {
        self.modal.set(None);
    }
}

/// Access the page state.
///
/// Must be called within the tree mounted by [`crate::App`].
pub fn use_site() -> SiteState {
    use_context::<SiteState>().expect("SiteState not found in context")
}
