//! # folio-domain
//!
//! Pure domain model for the folio portfolio page.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, calendar helpers
//! - Define **preferences** (display [`language`] and visual [`theme`])
//! - Define **project cards** and the searchable/sortable view of them
//! - Implement the **filter/sort engine** ([`arrangement::arrange`])
//! - Define the static **details catalog** and the overlay content it yields
//! - Hold small UI policies that are pure functions (scroll threshold)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser APIs.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod arrangement;
pub mod chat_widget;
pub mod details;
pub mod language;
pub mod project;
pub mod scroll;
pub mod search;
pub mod sort;
pub mod theme;
