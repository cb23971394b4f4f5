//! Bilingual text: one span per language, only the active one shown.

use folio_domain::language::Language;
use leptos::prelude::*;

use crate::state::use_site;

#[component]
pub fn Tr(#[prop(into)] en: String, #[prop(into)] es: String) -> impl IntoView {
    let state = use_site();
    view! {
        <span class="en" class:hidden=move || !state.is_shown(Language::En)>{en}</span>
        <span class="es" class:hidden=move || !state.is_shown(Language::Es)>{es}</span>
    }
}
