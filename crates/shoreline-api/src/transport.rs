//! HTTP client construction shared by every portal consumer.

use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How to verify the portal's TLS certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Accept any certificate (for lab deployments behind self-signed TLS).
    DangerAcceptInvalid,
}

/// Connection parameters for a [`crate::PortalClient`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Build the underlying `reqwest::Client`.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::Error> {
        let builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("shoreline/", env!("CARGO_PKG_VERSION")));

        let builder = match self.tls {
            TlsMode::System => builder,
            TlsMode::DangerAcceptInvalid => builder.danger_accept_invalid_certs(true),
        };

        builder
            .build()
            .map_err(|e| crate::Error::Tls(format!("could not construct HTTP client: {e}")))
    }
}
