//! Command dispatch: bridges CLI args -> portal calls -> output formatting.

pub mod config_cmd;
pub mod incidents;
pub mod lifeguards;
pub mod managers;
pub mod regions;
pub mod util;

use shoreline_api::PortalClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a portal-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &PortalClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Regions(args) => regions::handle(client, args, global).await,
        Command::Managers(args) => managers::handle(client, args, global).await,
        Command::Lifeguards(args) => lifeguards::handle(client, args, global).await,
        Command::Incidents(args) => incidents::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
