//! Overlay showing a project's details text.

use folio_domain::details::ModalContent;
use leptos::ev;
use leptos::prelude::*;

use crate::state::use_site;

/// Closes on the close button, a backdrop click, or Escape.
#[component]
pub fn DetailsModal() -> impl IntoView {
    let state = use_site();

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.modal.with_untracked(Option::is_some) {
            state.close_details();
        }
    });
    on_cleanup(move || handle.remove());

    let field = move |pick: fn(&ModalContent) -> &String| {
        move || {
            state
                .modal
                .with(|content| content.as_ref().map(|c| pick(c).clone()))
                .unwrap_or_default()
        }
    };

    view! {
        <Show when=move || state.modal.with(Option::is_some)>
            <div
                id="detailsModal"
                class="modal-backdrop"
                on:click=move |_| state.close_details()
            >
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="modal-close" title="Close" on:click=move |_| state.close_details()>
                        "\u{00D7}"
                    </button>
                    <h3 id="modalTitle">{field(|c| &c.title)}</h3>
                    <p id="modalMeta" class="modal-meta">{field(|c| &c.meta)}</p>
                    <p id="modalBody">{field(|c| &c.body)}</p>
                </div>
            </div>
        </Show>
    }
}
