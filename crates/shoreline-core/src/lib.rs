// shoreline-core: Reactive domain layer between shoreline-api and consumers.

pub mod convert;
pub mod draft;
pub mod error;
pub mod grouping;
pub mod model;
pub mod panel;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use draft::{parse_locations_json, LifeguardDraft, LocationsParseError, ManagerDraft, RegionDraft};
pub use error::CoreError;
pub use grouping::{group_incidents, IncidentFilters, IncidentGroup, StatusFilter};
pub use panel::{IncidentPanel, LifeguardPanel, ManagerPanel, RegionPanel};
pub use store::{DataStore, StoreEvent};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    EntityId, Incident, Lifeguard, Manager, ManagerSummary, Region, RegionSummary, DONE_STATE,
};
