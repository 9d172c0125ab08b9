// ── Lifeguard domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A lifeguard on the roster. Belongs to exactly one region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lifeguard {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub region_id: EntityId,
    pub created: DateTime<Utc>,
}
