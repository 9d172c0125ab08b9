//! Incident command handlers.
//!
//! The list view mirrors the portal's grouped presentation: reports
//! sharing a `group_id` describe the same real-world event and render
//! as one line unless `--expand` is given.

use serde::Serialize;
use shoreline_api::PortalClient;
use shoreline_core::{
    group_incidents, EntityId, Incident, IncidentFilters, StatusFilter,
};
use tabled::Tabled;

use crate::cli::{GlobalOpts, IncidentsArgs, IncidentsCommand, StatusArg};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Done => StatusFilter::Done,
            StatusArg::Unfinished => StatusFilter::Unfinished,
        }
    }
}

// ── Serializable projection ─────────────────────────────────────────

#[derive(Serialize)]
struct GroupView {
    group_id: String,
    reports: usize,
    incidents: Vec<Incident>,
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Reports")]
    reports: usize,
    #[tabled(rename = "Latest")]
    latest: String,
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "State")]
    state: String,
}

#[derive(Tabled)]
struct IncidentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Reported by")]
    reported_by: String,
    #[tabled(rename = "State")]
    state: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &PortalClient,
    args: IncidentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = Renderer::new(global);
    match args.command {
        IncidentsCommand::List {
            person,
            date,
            region,
            status,
            expand,
        } => {
            // regions come along purely for label resolution
            let (incidents, regions) =
                tokio::try_join!(client.list_incidents(), client.list_regions())?;
            let incidents: Vec<std::sync::Arc<Incident>> = incidents
                .into_iter()
                .map(|i| std::sync::Arc::new(Incident::from(i)))
                .collect();
            let label = |region_id: &EntityId| -> String {
                regions
                    .iter()
                    .find(|r| r.id == region_id.as_str())
                    .map_or_else(|| "Unknown".to_owned(), |r| r.slug.clone())
            };

            let filters = IncidentFilters {
                person,
                date,
                region: region.map(EntityId::from),
                status: status.into(),
            };
            let groups = group_incidents(&incidents, &filters);

            let views: Vec<GroupView> = groups
                .iter()
                .map(|g| GroupView {
                    group_id: g.group_id.clone(),
                    reports: g.len(),
                    incidents: g.incidents.iter().map(|i| (**i).clone()).collect(),
                })
                .collect();

            if expand {
                let rows: Vec<Incident> = views
                    .iter()
                    .flat_map(|v| v.incidents.iter().cloned())
                    .collect();
                out.list(
                    &rows,
                    |i| IncidentRow {
                        id: i.id.to_string(),
                        group: i.group_id.clone(),
                        date: i.date_of_incident.to_string(),
                        person: i.person_involved_name.clone(),
                        region: label(&i.region_id),
                        reported_by: i.employee_completing_report.clone(),
                        state: i.state.clone(),
                    },
                    |i| i.id.to_string(),
                );
            } else {
                out.list(
                    &views,
                    |v| {
                        // groups are never empty; newest member first
                        let newest = &v.incidents[0];
                        GroupRow {
                            group: v.group_id.clone(),
                            reports: v.reports,
                            latest: newest.date_of_incident.to_string(),
                            person: newest.person_involved_name.clone(),
                            region: label(&newest.region_id),
                            state: newest.state.clone(),
                        }
                    },
                    |v| v.group_id.clone(),
                );
            }
            Ok(())
        }

        IncidentsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete incident report '{id}'?"), global.yes)? {
                return Ok(());
            }
            client.delete_incident(&id).await?;
            out.note("Incident report deleted");
            Ok(())
        }
    }
}
