//! Region command handlers.

use owo_colors::OwoColorize;
use shoreline_api::types::{RegionResponse, RegionUpdate};
use shoreline_api::PortalClient;
use shoreline_core::RegionDraft;
use tabled::Tabled;

use crate::cli::{GlobalOpts, RegionsArgs, RegionsCommand};
use crate::error::CliError;
use crate::output::{self, Renderer};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Locations")]
    locations: usize,
    #[tabled(rename = "Managers")]
    managers: String,
}

impl From<&RegionResponse> for RegionRow {
    fn from(r: &RegionResponse) -> Self {
        Self {
            id: r.id.clone(),
            slug: r.slug.clone(),
            locations: r.locations.len(),
            managers: r
                .managers
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn region_detail(r: &RegionResponse) -> String {
    let mut out = String::new();
    out.push_str(&format!("ID:       {}\n", r.id));
    out.push_str(&format!("Slug:     {}\n", r.slug));
    out.push_str(&format!("Created:  {}\n", r.created));
    out.push_str("Locations:\n");
    for (key, label) in &r.locations {
        out.push_str(&format!("  {key}: {label}\n"));
    }
    out.push_str("Managers:\n");
    for m in &r.managers {
        out.push_str(&format!("  {} <{}>\n", m.name, m.email));
    }
    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &PortalClient,
    args: RegionsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = Renderer::new(global);
    match args.command {
        RegionsCommand::List => {
            let regions = client.list_regions().await?;
            out.list(&regions, |r| RegionRow::from(r), |r| r.id.clone());
            Ok(())
        }

        RegionsCommand::Get { id } => {
            let region = client.get_region(&id).await?;
            out.single(&region, region_detail, |r| r.id.clone());
            Ok(())
        }

        RegionsCommand::Create {
            slug,
            locations,
            locations_json,
        } => {
            let map = match locations_json {
                Some(path) => util::read_locations_file(&path)?,
                None => util::parse_location_pairs(&locations)?,
            };
            // minimum-one-location rule applies before any network call
            let draft = RegionDraft {
                slug,
                locations: map.into_iter().collect(),
            };
            let body = draft.validate_create().map_err(CliError::from)?;

            let created = client.create_region(&body).await?;
            out.single(&created, region_detail, |r| r.id.clone());
            Ok(())
        }

        RegionsCommand::Update {
            id,
            slug,
            locations,
        } => {
            if slug.is_none() && locations.is_empty() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "nothing to update; pass --slug and/or --location".into(),
                });
            }
            let body = RegionUpdate {
                slug,
                locations: if locations.is_empty() {
                    None
                } else {
                    Some(util::parse_location_pairs(&locations)?)
                },
            };
            let updated = client.update_region(&id, &body).await?;
            out.single(&updated, region_detail, |r| r.id.clone());
            Ok(())
        }

        RegionsCommand::SetLocations {
            id,
            locations,
            locations_json,
        } => {
            let map = match locations_json {
                Some(path) => util::read_locations_file(&path)?,
                None => util::parse_location_pairs(&locations)?,
            };
            if map.is_empty() {
                return Err(CliError::Validation {
                    field: "location".into(),
                    reason: "a region needs at least one location".into(),
                });
            }
            let body = shoreline_api::types::LocationsPatch { locations: map };
            let updated = client.update_region_locations(&id, &body).await?;
            out.single(&updated, region_detail, |r| r.id.clone());
            Ok(())
        }

        RegionsCommand::Assign { region, manager } => {
            let updated = client.assign_manager(&region, &manager).await?;
            out.note(&format!(
                "Assigned; '{}' now has {}",
                updated.slug,
                util::count_noun(updated.managers.len(), "manager")
            ));
            Ok(())
        }

        RegionsCommand::Unassign { region, manager } => {
            let updated = client.unassign_manager(&region, &manager).await?;
            out.note(&format!(
                "Unassigned; '{}' now has {}",
                updated.slug,
                util::count_noun(updated.managers.len(), "manager")
            ));
            Ok(())
        }

        RegionsCommand::Delete { id } => {
            let warning = "Deleting a region also deletes every incident report filed in it.";
            let prompt = if output::should_color(&global.color) {
                format!("{} Delete region '{id}'?", warning.yellow())
            } else {
                format!("{warning} Delete region '{id}'?")
            };
            if !util::confirm(&prompt, global.yes)? {
                return Ok(());
            }
            client.delete_region(&id).await?;
            out.note("Region deleted");
            Ok(())
        }
    }
}
