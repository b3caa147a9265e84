//! Wire contracts shared between the dashboard and the asset registry API.
//!
//! Everything here is plain data plus the few rules the client applies on
//! its own (component slots, transfer planning, list search/pagination).

pub mod domain;
pub mod shared;
pub mod system;
