//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.

pub mod chat_bootstrap;
pub mod details_service;
pub mod language_switch;
pub mod project_board;
pub mod scroll_to_top;
pub mod theme_switch;
