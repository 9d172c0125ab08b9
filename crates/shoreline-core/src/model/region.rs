// ── Region domain type ──

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A patrol region: a unique slug, its named locations, and the managers
/// currently assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: EntityId,
    /// Unique human-readable key. Uniqueness is enforced server-side;
    /// clients surface the resulting conflict error.
    pub slug: String,
    /// Location key -> display name/address. Semantically unordered,
    /// rendered in insertion order.
    pub locations: IndexMap<String, String>,
    pub managers: Vec<ManagerSummary>,
    pub created: DateTime<Utc>,
}

/// Manager shape as embedded in region payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerSummary {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

impl Region {
    /// Whether the given manager is currently assigned to this region.
    pub fn has_manager(&self, manager_id: &EntityId) -> bool {
        self.managers.iter().any(|m| &m.id == manager_id)
    }
}
