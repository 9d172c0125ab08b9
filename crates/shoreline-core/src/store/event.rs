// ── Typed change events ──
//
// Mutations are announced on a broadcast bus with typed payloads, so
// each panel re-fetches only for the entity kinds it actually derives
// display data from (a manager rename must show up in region badges,
// but a lifeguard edit concerns nobody else).

/// A successful mutation against one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    RegionsChanged,
    ManagersChanged,
    LifeguardsChanged,
    IncidentsChanged,
}
