//! Lifeguard command handlers.

use shoreline_api::types::LifeguardResponse;
use shoreline_api::PortalClient;
use shoreline_core::{EntityId, LifeguardDraft};
use tabled::Tabled;

use crate::cli::{GlobalOpts, LifeguardsArgs, LifeguardsCommand};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LifeguardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Region")]
    region: String,
}

fn lifeguard_row(l: &LifeguardResponse, region_label: &str) -> LifeguardRow {
    LifeguardRow {
        id: l.id.clone(),
        name: l.name.clone(),
        phone: l.phone.clone(),
        region: region_label.to_owned(),
    }
}

fn lifeguard_detail(l: &LifeguardResponse) -> String {
    format!(
        "ID:       {}\nName:     {}\nPhone:    {}\nRegion:   {}\nCreated:  {}",
        l.id, l.name, l.phone, l.region_id, l.created
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &PortalClient,
    args: LifeguardsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = Renderer::new(global);
    match args.command {
        LifeguardsCommand::List => {
            // fetch regions too, so the table shows slugs instead of ids
            let (lifeguards, regions) =
                tokio::try_join!(client.list_lifeguards(), client.list_regions())?;
            let label = |region_id: &str| -> String {
                regions
                    .iter()
                    .find(|r| r.id == region_id)
                    .map_or_else(|| "Unknown".to_owned(), |r| r.slug.clone())
            };
            out.list(
                &lifeguards,
                |l| lifeguard_row(l, &label(&l.region_id)),
                |l| l.id.clone(),
            );
            Ok(())
        }

        LifeguardsCommand::Get { id } => {
            let lifeguard = client.get_lifeguard(&id).await?;
            out.single(&lifeguard, lifeguard_detail, |l| l.id.clone());
            Ok(())
        }

        LifeguardsCommand::FindByPhone { phone } => {
            let lifeguard = match client.get_lifeguard_by_phone(&phone).await {
                Ok(found) => found,
                Err(e) if e.is_not_found() => {
                    return Err(CliError::NotFound {
                        resource_type: "Lifeguard".into(),
                        identifier: phone,
                        list_command: "lifeguards list".into(),
                    });
                }
                Err(e) => return Err(e.into()),
            };
            out.single(&lifeguard, lifeguard_detail, |l| l.id.clone());
            Ok(())
        }

        LifeguardsCommand::Create {
            name,
            phone,
            region,
        } => {
            let draft = LifeguardDraft {
                name,
                phone,
                region_id: Some(EntityId::from(region)),
            };
            let body = draft.validate_create().map_err(CliError::from)?;

            let created = client.create_lifeguard(&body).await?;
            out.single(&created, lifeguard_detail, |l| l.id.clone());
            Ok(())
        }

        LifeguardsCommand::Update { id, name, phone } => {
            if name.is_none() && phone.is_none() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "nothing to update; pass --name and/or --phone".into(),
                });
            }
            let current = client.get_lifeguard(&id).await?;
            let draft = LifeguardDraft {
                name: name.unwrap_or(current.name),
                phone: phone.unwrap_or(current.phone),
                region_id: None,
            };
            let body = draft.validate_update().map_err(CliError::from)?;

            let updated = client.update_lifeguard(&id, &body).await?;
            out.single(&updated, lifeguard_detail, |l| l.id.clone());
            Ok(())
        }

        LifeguardsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete lifeguard '{id}'?"), global.yes)? {
                return Ok(());
            }
            client.delete_lifeguard(&id).await?;
            out.note("Lifeguard deleted");
            Ok(())
        }
    }
}
