//! Canonical domain types for the Shoreline portal.
//!
//! Wire shapes from `shoreline-api` are converted into these via the
//! [`crate::convert`] module; everything downstream (store, panels, CLI)
//! works in terms of this module only.

pub mod entity_id;
pub mod incident;
pub mod lifeguard;
pub mod manager;
pub mod region;

pub use entity_id::EntityId;
pub use incident::{DONE_STATE, Incident};
pub use lifeguard::Lifeguard;
pub use manager::{Manager, RegionSummary};
pub use region::{ManagerSummary, Region};
