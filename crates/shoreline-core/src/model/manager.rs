// ── Manager domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A regional manager. Every manager is associated with at least one
/// region at creation time (client-enforced minimum-one rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manager {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub regions: Vec<RegionSummary>,
    pub created: DateTime<Utc>,
}

/// Region shape as embedded in manager payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: EntityId,
    pub slug: String,
}
