//! Browser adapter and composition root for the portfolio page.
//!
//! [`start`] loads the embedded configuration and catalog, wires the
//! `localStorage` preference store and the chat widget loader into an
//! [`AppContext`](folio_app::context::AppContext), and mounts [`App`].

use leptos::prelude::*;

mod catalog;
mod chat_widget;
mod components;
mod config;
mod dom;
mod error;
mod logging;
mod state;
mod storage;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};

use chat_widget::MyAliceWidget;
use components::{BackToTop, DetailsModal, Footer, LangToggle, ProjectGrid, ThemeToggle, Tr};
use state::{SiteContext, SiteState};
use storage::LocalStoragePreferences;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="brand" href="#top">"Portfolio"</a>
            <nav class="site-nav">
                <a href="#projects">
                    <Tr en="Projects" es="Proyectos"/>
                </a>
            </nav>
            <div class="header-controls">
                <LangToggle/>
                <ThemeToggle/>
            </div>
        </header>
        <main id="top">
            <section class="hero">
                <h1>
                    <Tr en="Games, tools and web apps" es="Juegos, herramientas y aplicaciones web"/>
                </h1>
            </section>
            <ProjectGrid/>
        </main>
        <Footer/>
        <DetailsModal/>
        <BackToTop/>
    }
}

/// Entry point: configure logging, build the context, mount the page.
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = config_error {
        tracing::error!(error = ?err, "invalid site config, using defaults");
    }

    let catalog = Catalog::embedded().unwrap_or_else(|err| {
        tracing::error!(error = ?err, "invalid project catalog, rendering none");
        Catalog::default()
    });

    let context: SiteContext = match folio_app::context::AppContext::new(
        LocalStoragePreferences,
        MyAliceWidget::new(config.chat_widget.script_src.clone()),
        config.app_settings(),
        catalog.cards,
        catalog.details,
    ) {
        Ok(context) => context,
        Err(err) => {
            tracing::error!(error = %err, "failed to build page context");
            return;
        }
    };

    leptos::mount::mount_to_body(move || {
        provide_context(SiteState::new(context));
        view! { <App/> }
    });
}
