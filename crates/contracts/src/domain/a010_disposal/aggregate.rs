pub use crate::domain::a009_incorporation::aggregate::{Movement, MovementDto};

pub const ENDPOINT: &str = "/desincorp";

/// Write-off of an asset; same record shape as an incorporation.
pub type Disposal = Movement;
