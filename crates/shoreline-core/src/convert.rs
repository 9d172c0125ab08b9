// ── Wire-to-domain conversions ──
//
// Keeps serde details of the portal API out of the rest of the crate.

use shoreline_api::types as wire;

use crate::model::{
    EntityId, Incident, Lifeguard, Manager, ManagerSummary, Region, RegionSummary,
};

impl From<wire::RegionResponse> for Region {
    fn from(r: wire::RegionResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            slug: r.slug,
            locations: r.locations,
            managers: r.managers.into_iter().map(ManagerSummary::from).collect(),
            created: r.created,
        }
    }
}

impl From<wire::ManagerSummary> for ManagerSummary {
    fn from(m: wire::ManagerSummary) -> Self {
        Self {
            id: EntityId::from(m.id),
            name: m.name,
            email: m.email,
        }
    }
}

impl From<wire::ManagerResponse> for Manager {
    fn from(m: wire::ManagerResponse) -> Self {
        Self {
            id: EntityId::from(m.id),
            name: m.name,
            email: m.email,
            regions: m.regions.into_iter().map(RegionSummary::from).collect(),
            created: m.created,
        }
    }
}

impl From<wire::RegionSummary> for RegionSummary {
    fn from(r: wire::RegionSummary) -> Self {
        Self {
            id: EntityId::from(r.id),
            slug: r.slug,
        }
    }
}

impl From<wire::LifeguardResponse> for Lifeguard {
    fn from(l: wire::LifeguardResponse) -> Self {
        Self {
            id: EntityId::from(l.id),
            name: l.name,
            phone: l.phone,
            region_id: EntityId::from(l.region_id),
            created: l.created,
        }
    }
}

impl From<wire::IncidentResponse> for Incident {
    fn from(i: wire::IncidentResponse) -> Self {
        Self {
            id: EntityId::from(i.id),
            group_id: i.group_id,
            person_involved_name: i.person_involved_name,
            date_of_incident: i.date_of_incident,
            region_id: EntityId::from(i.region_id),
            employee_completing_report: i.employee_completing_report,
            incident_summary: i.incident_summary,
            state: i.state,
            created: i.created,
        }
    }
}
