//! End-to-end session tests for the portfolio page.
//!
//! Each test builds a complete [`AppContext`] (in-memory preference store,
//! recording chat widget, real services, real cards) and drives it the way
//! the page's event handlers do.

use std::sync::{Arc, Mutex};

use folio_app::context::{AppContext, AppSettings};
use folio_app::ports::{ChatWidgetLoader, MemoryPreferenceStore, PreferenceStore};
use folio_domain::chat_widget::ChatWidgetOptions;
use folio_domain::details::DetailsCatalog;
use folio_domain::error::FolioError;
use folio_domain::id::ProjectId;
use folio_domain::language::{Language, Localized};
use folio_domain::project::ProjectCard;
use folio_domain::theme::Theme;

#[derive(Clone, Default)]
struct RecordingWidget {
    loads: Arc<Mutex<Vec<ChatWidgetOptions>>>,
}

impl ChatWidgetLoader for RecordingWidget {
    fn load(&self, options: &ChatWidgetOptions) -> Result<(), FolioError> {
        self.loads.lock().unwrap().push(options.clone());
        Ok(())
    }
}

fn text(en: &str, es: &str) -> Localized<String> {
    Localized::new(en.to_string(), es.to_string())
}

fn cards() -> Vec<ProjectCard> {
    vec![
        ProjectCard::builder()
            .title("Word Rush")
            .date("2024-01-01")
            .featured(true)
            .meta(text("React Native · AI", "React Native · IA"))
            .build()
            .unwrap(),
        ProjectCard::builder()
            .title("Mishka")
            .date("2023-01-01")
            .meta(text("MERN · Events", "MERN · Eventos"))
            .build()
            .unwrap(),
        ProjectCard::builder()
            .title("NewtonRoids")
            .meta(text("Arcade · Physics", "Arcade · Física"))
            .build()
            .unwrap(),
        ProjectCard::builder()
            .id(ProjectId::new("unknown-project").unwrap())
            .title("Unknown Project")
            .date("2020-01-01")
            .build()
            .unwrap(),
    ]
}

fn details() -> DetailsCatalog {
    DetailsCatalog::new()
        .with_entry(
            ProjectId::new("word-rush").unwrap(),
            text(
                "Game prototype built with React Native.",
                "Prototipo de juego construido con React Native.",
            ),
        )
        .with_entry(
            ProjectId::new("mishka").unwrap(),
            text(
                "MERN web-commerce booking platform.",
                "Plataforma MERN de reservas.",
            ),
        )
}

fn session(
    store: MemoryPreferenceStore,
) -> (AppContext<MemoryPreferenceStore, RecordingWidget>, RecordingWidget) {
    let widget = RecordingWidget::default();
    let ctx = AppContext::new(
        store,
        widget.clone(),
        AppSettings::default(),
        cards(),
        details(),
    )
    .expect("session should initialise");
    (ctx, widget)
}

fn visible_titles(ctx: &AppContext<MemoryPreferenceStore, RecordingWidget>) -> Vec<String> {
    ctx.arrangement()
        .visible()
        .iter()
        .map(|id| ctx.board().card(id).unwrap().title.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Search and sort
// ---------------------------------------------------------------------------

#[test]
fn should_show_only_word_rush_when_searching_word() {
    let (mut ctx, _) = session(MemoryPreferenceStore::new());

    ctx.search("word");

    assert_eq!(visible_titles(&ctx), vec!["Word Rush"]);
    let hidden: Vec<&str> = ctx
        .arrangement()
        .hidden()
        .iter()
        .map(ProjectId::as_str)
        .collect();
    assert!(hidden.contains(&"mishka"));
    assert!(hidden.contains(&"newtonroids"));
}

#[test]
fn should_keep_filter_when_switching_sort_modes() {
    let (mut ctx, _) = session(MemoryPreferenceStore::new());

    ctx.search("m");
    for mode in ["newest", "featured", "az", "nonsense"] {
        ctx.sort_by(mode);
        assert!(
            !visible_titles(&ctx).contains(&"Word Rush".to_string()),
            "mode {mode} reintroduced a filtered card"
        );
    }
}

#[test]
fn should_order_featured_first_then_newest() {
    let (mut ctx, _) = session(MemoryPreferenceStore::new());

    ctx.sort_by("featured");

    assert_eq!(
        visible_titles(&ctx),
        vec!["Word Rush", "Mishka", "Unknown Project", "NewtonRoids"]
    );
}

#[test]
fn should_order_alphabetically() {
    let (mut ctx, _) = session(MemoryPreferenceStore::new());

    ctx.sort_by("az");

    assert_eq!(
        visible_titles(&ctx),
        vec!["Mishka", "NewtonRoids", "Unknown Project", "Word Rush"]
    );
}

#[test]
fn should_produce_same_arrangement_when_inputs_repeat() {
    let (mut ctx, _) = session(MemoryPreferenceStore::new());

    let first = ctx.search("o").clone();
    let second = ctx.search("o").clone();

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[test]
fn should_swap_visible_language_and_persist_when_toggled() {
    let store = MemoryPreferenceStore::new();
    let (mut ctx, _) = session(store.clone());
    assert!(ctx.is_language_shown(Language::En));

    ctx.toggle_language();

    assert!(!ctx.is_language_shown(Language::En));
    assert!(ctx.is_language_shown(Language::Es));
    assert_eq!(store.get("portfolio.lang").as_deref(), Some("es"));
}

#[test]
fn should_start_in_spanish_when_legacy_value_is_stored() {
    let store = MemoryPreferenceStore::new().with_value("portfolio.lang", "espanol");
    let (ctx, _) = session(store);

    assert_eq!(ctx.language(), Language::Es);
}

#[test]
fn should_persist_dark_theme_when_toggled() {
    let store = MemoryPreferenceStore::new();
    let (mut ctx, _) = session(store.clone());

    assert_eq!(ctx.toggle_theme(), Theme::Dark);

    assert_eq!(ctx.theme().root_marker(), Some("dark"));
    assert_eq!(store.get("portfolio.theme").as_deref(), Some("dark"));
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

#[test]
fn should_show_placeholder_for_project_without_details() {
    let (ctx, _) = session(MemoryPreferenceStore::new());

    let content = ctx
        .open_details(&ProjectId::new("unknown-project").unwrap())
        .unwrap();

    assert_eq!(content.title, "Unknown Project");
    assert_eq!(content.body, "Details not available.");
}

#[test]
fn should_follow_language_when_opening_details() {
    let (mut ctx, _) = session(MemoryPreferenceStore::new());
    ctx.toggle_language();

    let content = ctx.open_details(&ProjectId::new("mishka").unwrap()).unwrap();

    assert_eq!(content.meta, "MERN · Eventos");
    assert_eq!(content.body, "Plataforma MERN de reservas.");
}

// ---------------------------------------------------------------------------
// Scrolling
// ---------------------------------------------------------------------------

#[test]
fn should_load_chat_widget_once_and_toggle_back_to_top() {
    let (mut ctx, widget) = session(MemoryPreferenceStore::new());

    assert!(!ctx.on_scroll(100.0).show_back_to_top);
    assert!(ctx.on_scroll(501.0).show_back_to_top);
    assert!(!ctx.on_scroll(500.0).show_back_to_top);

    let loads = widget.loads.lock().unwrap();
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].selector, "myAliceWebChat");
    assert!(ctx.back_to_top().abs() < f64::EPSILON);
}

#[test]
fn should_not_load_chat_widget_when_disabled() {
    let widget = RecordingWidget::default();
    let settings = AppSettings {
        chat_widget: None,
        ..AppSettings::default()
    };
    let mut ctx = AppContext::new(
        MemoryPreferenceStore::new(),
        widget.clone(),
        settings,
        cards(),
        details(),
    )
    .unwrap();

    ctx.on_scroll(1_000.0);

    assert!(widget.loads.lock().unwrap().is_empty());
}
