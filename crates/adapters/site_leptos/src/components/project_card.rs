//! One portfolio project card.

use folio_domain::language::Language;
use folio_domain::project::ProjectCard;
use leptos::prelude::*;

use super::Tr;
use crate::state::use_site;

/// Renders a card with the data attributes the stylesheet and filters key
/// on. Its details button is bound to this card's id.
#[component]
pub fn ProjectCardView(card: ProjectCard, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let state = use_site();
    let id = card.id.clone();
    let open = move |_| state.open_details(&id);

    let tags = card
        .tags
        .iter()
        .map(|tag| view! { <li class="tag">{tag.clone()}</li> })
        .collect_view();

    view! {
        <article
            class="project"
            class:hidden=move || !visible.get()
            data-id=card.id.to_string()
            data-title=card.title.clone()
            data-date=card.date.clone()
            data-featured=card.featured_flag()
        >
            <h3 class="project-title">{card.title.clone()}</h3>
            <p class="project-meta en" class:hidden=move || !state.is_shown(Language::En)>
                {card.meta.en.clone()}
            </p>
            <p class="project-meta es" class:hidden=move || !state.is_shown(Language::Es)>
                {card.meta.es.clone()}
            </p>
            <p class="project-summary">
                <Tr en=card.summary.en.clone() es=card.summary.es.clone()/>
            </p>
            <ul class="tags">{tags}</ul>
            <button class="details-button" data-details=card.id.to_string() on:click=open>
                <Tr en="Details" es="Detalles"/>
            </button>
        </article>
    }
}
