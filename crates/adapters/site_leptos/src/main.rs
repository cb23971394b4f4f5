fn main() {
    folio_site_leptos::start();
}
