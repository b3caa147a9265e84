pub mod aggregate;
pub mod kind;

pub use kind::{check_slot, ComponentKind, SlotConflict};
