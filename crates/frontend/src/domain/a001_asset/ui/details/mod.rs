//! Asset form (create / edit), opened as a modal from the asset list.
//!
//! - view_model.rs: form state, load and save commands
//! - view.rs: the form itself, plus the components panel for computers

mod view;
mod view_model;

pub use view::AssetDetails;
pub use view_model::AssetDetailsViewModel;
