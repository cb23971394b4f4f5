//! Search box, sort selector and the project grid.

use folio_domain::id::ProjectId;
use folio_domain::language::Language;
use folio_domain::sort::SortMode;
use leptos::prelude::*;

use super::{ProjectCardView, Tr};
use crate::state::use_site;

fn sort_label(mode: SortMode, lang: Language) -> &'static str {
    match (mode, lang) {
        (SortMode::Newest, Language::En) => "Newest",
        (SortMode::Newest, Language::Es) => "Más recientes",
        (SortMode::Featured, Language::En) => "Featured",
        (SortMode::Featured, Language::Es) => "Destacados",
        (SortMode::Az, _) => "A\u{2013}Z",
    }
}

fn search_placeholder(lang: Language) -> &'static str {
    match lang {
        Language::En => "Search projects\u{2026}",
        Language::Es => "Buscar proyectos\u{2026}",
    }
}

/// Project list with live filtering and ordering.
///
/// Cards are keyed by id, so a new arrangement moves existing nodes instead
/// of re-rendering them. Hidden cards stay mounted after the visible ones.
#[component]
pub fn ProjectGrid() -> impl IntoView {
    let state = use_site();
    let cards = StoredValue::new(state.cards());

    let order = move || {
        state
            .arrangement
            .with(|arrangement| arrangement.order().cloned().collect::<Vec<_>>())
    };
    let count = move || state.arrangement.with(|arrangement| arrangement.visible_count());
    let is_empty = move || count() == 0;

    let render_card = move |id: ProjectId| {
        let card = cards.with_value(|cards| cards.iter().find(|card| card.id == id).cloned())?;
        let visible = Signal::derive(move || {
            state
                .arrangement
                .with(|arrangement| arrangement.is_visible(&id))
        });
        Some(view! { <ProjectCardView card=card visible=visible/> })
    };

    view! {
        <section id="projects" class="projects">
            <div class="project-controls">
                <input
                    id="search"
                    type="search"
                    placeholder=move || search_placeholder(state.language.get())
                    on:input=move |ev| state.search(&event_target_value(&ev))
                />
                <select id="sort" on:change=move |ev| state.sort_by(&event_target_value(&ev))>
                    {SortMode::ALL
                        .iter()
                        .map(|&mode| {
                            view! {
                                <option value=mode.code() selected={mode == SortMode::default()}>
                                    {move || sort_label(mode, state.language.get())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <span class="project-count">
                    {count} " " <Tr en="projects" es="proyectos"/>
                </span>
            </div>
            <Show when=is_empty>
                <p class="empty-state">
                    <Tr
                        en="No projects match your search."
                        es="Ningún proyecto coincide con tu búsqueda."
                    />
                </p>
            </Show>
            <div id="projectGrid" class="project-grid">
                <For each=order key=|id| id.clone() children=render_card/>
            </div>
        </section>
    }
}
