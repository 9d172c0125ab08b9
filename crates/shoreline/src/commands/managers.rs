//! Manager command handlers.

use shoreline_api::types::ManagerResponse;
use shoreline_api::PortalClient;
use shoreline_core::ManagerDraft;
use tabled::Tabled;

use crate::cli::{GlobalOpts, ManagersArgs, ManagersCommand};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ManagerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Regions")]
    regions: String,
}

impl From<&ManagerResponse> for ManagerRow {
    fn from(m: &ManagerResponse) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            email: m.email.clone(),
            regions: m
                .regions
                .iter()
                .map(|r| r.slug.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn manager_detail(m: &ManagerResponse) -> String {
    let mut out = String::new();
    out.push_str(&format!("ID:       {}\n", m.id));
    out.push_str(&format!("Name:     {}\n", m.name));
    out.push_str(&format!("Email:    {}\n", m.email));
    out.push_str(&format!("Created:  {}\n", m.created));
    out.push_str("Regions:\n");
    for r in &m.regions {
        out.push_str(&format!("  {} ({})\n", r.slug, r.id));
    }
    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &PortalClient,
    args: ManagersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = Renderer::new(global);
    match args.command {
        ManagersCommand::List => {
            let managers = client.list_managers().await?;
            out.list(&managers, |m| ManagerRow::from(m), |m| m.id.clone());
            Ok(())
        }

        ManagersCommand::Get { id } => {
            let manager = client.get_manager(&id).await?;
            out.single(&manager, manager_detail, |m| m.id.clone());
            Ok(())
        }

        ManagersCommand::Create {
            name,
            email,
            regions,
        } => {
            // minimum-one-region rule applies before any network call
            let draft = ManagerDraft {
                name,
                email,
                region_slugs: regions,
            };
            let body = draft.validate_create().map_err(CliError::from)?;

            let created = client.create_manager(&body).await?;
            out.single(&created, manager_detail, |m| m.id.clone());
            Ok(())
        }

        ManagersCommand::Update { id, name, email } => {
            if name.is_none() && email.is_none() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "nothing to update; pass --name and/or --email".into(),
                });
            }
            // the PUT body carries both fields; fill gaps from the
            // current record
            let current = client.get_manager(&id).await?;
            let draft = ManagerDraft {
                name: name.unwrap_or(current.name),
                email: email.unwrap_or(current.email),
                region_slugs: Vec::new(),
            };
            let body = draft.validate_update().map_err(CliError::from)?;

            let updated = client.update_manager(&id, &body).await?;
            out.single(&updated, manager_detail, |m| m.id.clone());
            Ok(())
        }

        ManagersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete manager '{id}'?"), global.yes)? {
                return Ok(());
            }
            client.delete_manager(&id).await?;
            out.note("Manager deleted");
            Ok(())
        }
    }
}
