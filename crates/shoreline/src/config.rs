//! Bridges the config file and CLI flags into a ready portal client.

use std::time::Duration;

use shoreline_api::transport::{TlsMode, TransportConfig};
use shoreline_api::PortalClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve config file + flags into a connected [`PortalClient`].
///
/// Flags beat the file: `--portal`, `--timeout`, and `--insecure` each
/// override the corresponding file value when given.
pub fn build_client(global: &GlobalOpts) -> Result<PortalClient, CliError> {
    let cfg = shoreline_config::load_config_or_default();
    let settings = cfg.resolve(global.portal.as_deref())?;

    let timeout = global
        .timeout
        .map_or(settings.timeout, Duration::from_secs);
    let tls = if global.insecure || settings.insecure {
        TlsMode::DangerAcceptInvalid
    } else {
        TlsMode::System
    };

    let transport = TransportConfig { tls, timeout };
    Ok(PortalClient::new(settings.url.as_str(), &transport)?)
}
