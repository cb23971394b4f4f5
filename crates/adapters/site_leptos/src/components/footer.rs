use folio_domain::time;
use leptos::prelude::*;

use super::Tr;

#[component]
pub fn Footer() -> impl IntoView {
    let year = time::current_year();
    view! {
        <footer class="site-footer">
            <p>
                "\u{00A9} " <span id="year">{year}</span> " "
                <Tr en="All rights reserved." es="Todos los derechos reservados."/>
            </p>
        </footer>
    }
}
