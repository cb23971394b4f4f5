use leptos::ev;
use leptos::prelude::*;

use crate::state::use_site;

/// Floating control that appears once the page is scrolled past the
/// configured threshold.
///
/// Owns the window scroll listener, which also drives the chat widget
/// bootstrap.
#[component]
pub fn BackToTop() -> impl IntoView {
    let state = use_site();

    let handle = window_event_listener(ev::scroll, move |_| state.on_scroll());
    on_cleanup(move || handle.remove());

    view! {
        <button
            id="btn-back-to-top"
            class="back-to-top"
            title="Back to top"
            style:display=move || if state.show_back_to_top.get() { "block" } else { "none" }
            on:click=move |_| state.back_to_top()
        >
            "\u{2191}"
        </button>
    }
}
