//! # folio-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore`: durable string settings (language, theme)
//!   - `ChatWidgetLoader`: third-party chat launcher injection
//! - Define **driving/inbound** use-cases as services:
//!   - `LanguageSwitch`, `ThemeSwitch`: preference state machines
//!   - `ScrollToTop`, `ChatBootstrap`: scroll-driven behavior
//!   - `ProjectBoard`: search and sort over the project grid
//!   - `DetailsService`: details overlay content
//! - Assemble them into one explicit [`context::AppContext`]
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod context;
pub mod ports;
pub mod services;
