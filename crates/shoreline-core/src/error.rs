// ── Core error types ──
//
// User-facing errors from shoreline-core. Consumers never see raw
// transport errors; the `From<shoreline_api::Error>` impl translates
// them into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Client-side validation ───────────────────────────────────────
    /// Caught before any network call; the draft is left untouched.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    // ── Portal errors (wrapped, not exposed raw) ─────────────────────
    /// Non-2xx rejection from the portal, message already humanized.
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    #[error("Cannot reach portal: {reason}")]
    PortalUnreachable { reason: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(entity: &str, identifier: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.to_owned(),
            identifier: identifier.to_string(),
        }
    }

    /// Whether this error came from a server-side slug/uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Api { status: Some(409), .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shoreline_api::Error> for CoreError {
    fn from(err: shoreline_api::Error) -> Self {
        match err {
            shoreline_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::PortalUnreachable {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            shoreline_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shoreline_api::Error::Tls(reason) => CoreError::PortalUnreachable { reason },
            shoreline_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            shoreline_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
