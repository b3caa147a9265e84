pub mod aggregate;
pub mod plan;

pub use plan::{plan, ComponentOperation, PlanError, StepFailure, TransferStep};
