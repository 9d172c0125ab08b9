//! Wire types for the Shoreline portal REST API.
//!
//! These mirror the server's JSON shapes exactly. `shoreline-core`
//! converts them into domain types; nothing here carries behavior.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Regions ─────────────────────────────────────────────────────────

/// A patrol region with its named locations and assigned managers.
///
/// `locations` maps an opaque location key to a display name/address.
/// The server treats it as unordered; insertion order is preserved
/// here so displays stay stable across round trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionResponse {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub locations: IndexMap<String, String>,
    #[serde(default)]
    pub managers: Vec<ManagerSummary>,
    pub created: DateTime<Utc>,
}

/// Manager shape embedded in a region payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionCreate {
    pub slug: String,
    pub locations: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managers: Option<Vec<String>>,
}

/// Full-ish update body for `PUT /regions/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<IndexMap<String, String>>,
}

/// Body for the partial `PATCH /regions/{id}/update-locations` variant.
#[derive(Debug, Clone, Serialize)]
pub struct LocationsPatch {
    pub locations: IndexMap<String, String>,
}

// ── Managers ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub regions: Vec<RegionSummary>,
    pub created: DateTime<Utc>,
}

/// Region shape embedded in a manager payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: String,
    pub slug: String,
}

/// Create body. The server resolves `region_slugs` to associations;
/// it must contain at least one slug (also enforced client-side).
#[derive(Debug, Clone, Serialize)]
pub struct ManagerCreate {
    pub name: String,
    pub email: String,
    pub region_slugs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManagerUpdate {
    pub name: String,
    pub email: String,
}

// ── Lifeguards ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeguardResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub region_id: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LifeguardCreate {
    pub name: String,
    pub phone: String,
    pub region_id: String,
}

/// Update body. Region membership is fixed at creation; edits only
/// touch name and phone.
#[derive(Debug, Clone, Serialize)]
pub struct LifeguardUpdate {
    pub name: String,
    pub phone: String,
}

// ── Incidents ───────────────────────────────────────────────────────

/// A single incident report. Reports sharing a `group_id` describe the
/// same real-world event filed by different employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentResponse {
    pub id: String,
    pub group_id: String,
    pub person_involved_name: String,
    pub date_of_incident: NaiveDate,
    pub region_id: String,
    pub employee_completing_report: String,
    #[serde(default)]
    pub incident_summary: String,
    /// `"done"` when the report is finalized; any other value counts
    /// as unfinished.
    pub state: String,
    pub created: DateTime<Utc>,
}
