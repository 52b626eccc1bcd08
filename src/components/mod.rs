//! UI Components
//!
//! Reusable Leptos components.

mod box_details;
mod crud_page;
mod form_field;
mod search_bar;
mod snackbar;
mod status_chip;
mod status_tabs;

pub use box_details::BoxDetails;
pub use crud_page::{crud_page, EntityView};
pub use form_field::{box_options, enum_options, project, SelectField, TextAreaField, TextField};
pub use search_bar::SearchBar;
pub use snackbar::Snackbar;
pub use status_chip::StatusChip;
pub use status_tabs::StatusTabs;
