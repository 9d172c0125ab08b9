// ── Incident grouping and filtering ──
//
// Derives the grouped incident view from the flat collection. The
// projection is recomputed from scratch on every input change; it is a
// pure function of (incidents, filters) and owns no state of its own.

use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use strum::{Display, EnumString};

use crate::model::{EntityId, Incident, DONE_STATE};

/// Tri-state status filter. Anything other than the literal `done`
/// state counts as unfinished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    Unfinished,
}

impl StatusFilter {
    fn matches(self, incident: &Incident) -> bool {
        match self {
            Self::All => true,
            Self::Done => incident.state == DONE_STATE,
            Self::Unfinished => incident.state != DONE_STATE,
        }
    }
}

/// Four independent predicates combined with AND semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentFilters {
    /// Case-insensitive substring match on the person involved.
    pub person: Option<String>,
    /// Exact match on the incident date.
    pub date: Option<NaiveDate>,
    /// Exact match on the region.
    pub region: Option<EntityId>,
    pub status: StatusFilter,
}

impl IncidentFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, incident: &Incident) -> bool {
        if let Some(person) = &self.person {
            let needle = person.to_lowercase();
            if !incident
                .person_involved_name
                .to_lowercase()
                .contains(&needle)
            {
                return false;
            }
        }
        if let Some(date) = self.date {
            if incident.date_of_incident != date {
                return false;
            }
        }
        if let Some(region) = &self.region {
            if incident.region_id != *region {
                return false;
            }
        }
        self.status.matches(incident)
    }
}

/// Incidents sharing a `group_id`, newest first.
#[derive(Debug, Clone)]
pub struct IncidentGroup {
    pub group_id: String,
    pub incidents: Vec<Arc<Incident>>,
}

impl IncidentGroup {
    /// Date of the most recent member. Members are sorted newest-first,
    /// and empty groups are never constructed.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.incidents.first().map(|i| i.date_of_incident)
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}

/// Filter, partition by `group_id`, and sort.
///
/// Members within a group are ordered by incident date descending
/// (creation time then id break ties), and groups by their most recent
/// member's date descending. The pipeline is idempotent: re-running it
/// on its own flattened output yields the same sequence.
pub fn group_incidents(
    incidents: &[Arc<Incident>],
    filters: &IncidentFilters,
) -> Vec<IncidentGroup> {
    let mut by_group: IndexMap<String, Vec<Arc<Incident>>> = IndexMap::new();
    for incident in incidents {
        if filters.matches(incident) {
            by_group
                .entry(incident.group_id.clone())
                .or_default()
                .push(Arc::clone(incident));
        }
    }

    let mut groups: Vec<IncidentGroup> = by_group
        .into_iter()
        .map(|(group_id, mut members)| {
            members.sort_by(|a, b| {
                b.date_of_incident
                    .cmp(&a.date_of_incident)
                    .then_with(|| b.created.cmp(&a.created))
                    .then_with(|| a.id.as_str().cmp(b.id.as_str()))
            });
            IncidentGroup { group_id, incidents: members }
        })
        .collect();

    groups.sort_by(|a, b| {
        b.latest_date()
            .cmp(&a.latest_date())
            .then_with(|| a.group_id.cmp(&b.group_id))
    });
    groups
}
