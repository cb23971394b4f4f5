use leptos::prelude::*;

use crate::state::use_site;

/// Button flipping the page between English and Spanish. Shows the active
/// language code.
#[component]
pub fn LangToggle() -> impl IntoView {
    let state = use_site();
    view! {
        <button
            id="langToggle"
            class="lang-toggle"
            title="EN / ES"
            on:click=move |_| state.toggle_language()
        >
            {move || state.language.get().label()}
        </button>
    }
}
