mod back_to_top;
mod details_modal;
mod footer;
mod lang_toggle;
mod project_card;
mod project_grid;
mod theme_toggle;
mod tr;

pub use back_to_top::BackToTop;
pub use details_modal::DetailsModal;
pub use footer::Footer;
pub use lang_toggle::LangToggle;
pub use project_card::ProjectCardView;
pub use project_grid::ProjectGrid;
pub use theme_toggle::ThemeToggle;
pub use tr::Tr;
