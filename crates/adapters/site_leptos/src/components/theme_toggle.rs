//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::dom;
use crate::state::use_site;

/// A toggle button that switches between light and dark themes.
///
/// The root attribute follows the theme signal, so the stored theme is
/// applied on mount and every click re-applies it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_site();

    Effect::new(move |_| dom::apply_theme(state.theme.get()));

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| state.toggle_theme()
        >
            {move || state.theme.get().glyph()}
        </button>
    }
}
