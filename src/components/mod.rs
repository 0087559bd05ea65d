//! UI Components
//!
//! Leptos components of the admin pages. The entity components are generic
//! over `AdminEntity`.

mod alert_banner;
mod delete_dialog;
mod entity_detail;
mod entity_list;
mod entity_page;
mod entity_update;
mod field_input;
mod nav_bar;
mod not_found;

pub use alert_banner::AlertBanner;
pub use delete_dialog::DeleteConfirmDialog;
pub use entity_detail::EntityDetail;
pub use entity_list::EntityList;
pub use entity_page::EntityPage;
pub use entity_update::EntityUpdate;
pub use field_input::FieldInput;
pub use nav_bar::NavBar;
pub use not_found::NotFound;
