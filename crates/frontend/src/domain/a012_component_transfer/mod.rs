pub mod api;
pub mod runner;
pub mod ui;
