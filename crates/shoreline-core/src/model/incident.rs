// ── Incident domain type ──

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// The state value marking a finalized report. Anything else counts as
/// unfinished.
pub const DONE_STATE: &str = "done";

/// A single incident report. Reports sharing a `group_id` describe the
/// same real-world event, filed independently by different employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: EntityId,
    pub group_id: String,
    pub person_involved_name: String,
    pub date_of_incident: NaiveDate,
    pub region_id: EntityId,
    pub employee_completing_report: String,
    pub incident_summary: String,
    pub state: String,
    pub created: DateTime<Utc>,
}

impl Incident {
    pub fn is_done(&self) -> bool {
        self.state == DONE_STATE
    }
}
