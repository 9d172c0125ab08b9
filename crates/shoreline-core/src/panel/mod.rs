// ── Entity panels ──
//
// UI-free controllers, one per entity list. Each panel owns its
// transient view state (loading flag, inline errors, edit sub-state)
// and mediates between the portal client and the shared DataStore.
//
// Shared contract across panels:
// - `refresh()` fetches the entity collection plus any lookup
//   collections concurrently and applies them to the store only when
//   every fetch succeeds; on failure the prior store state stays
//   visible and the panel error is set.
// - Mutations validate client-side first, then apply the server's
//   response to the store and publish the matching `StoreEvent`.
//   Failures surface inline and never touch the stored list.
// - `handle_event()` re-fetches when a sibling collection this panel
//   derives display data from has changed.
//
// All methods take `&mut self`, so fetches for one panel are
// serialized and a superseded in-flight fetch can never overwrite
// newer state.

mod incident;
mod lifeguard;
mod manager;
mod region;

pub use incident::IncidentPanel;
pub use lifeguard::{LifeguardMode, LifeguardPanel};
pub use manager::{ManagerMode, ManagerPanel};
pub use region::{RegionMode, RegionPanel};
