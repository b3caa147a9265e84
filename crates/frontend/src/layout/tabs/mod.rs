//! Tab management
//!
//! - `page` wraps one tab's content and hides it when inactive
//! - `registry` maps tab.key → View
//! - `tab_labels` maps tab.key → title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{tab_label_for_key, tab_title};
