pub mod components_panel;
pub mod details;
pub mod list;
