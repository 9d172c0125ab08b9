//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use shoreline_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the portal: {reason}")]
    #[diagnostic(
        code(shoreline::portal_unreachable),
        help(
            "Check that the portal is running and the URL is right.\n\
             Self-signed TLS? Try --insecure (-k)."
        )
    )]
    PortalUnreachable { reason: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(shoreline::not_found),
        help("Run: shoreline {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    /// Portal rejection, message already extracted from `detail`.
    #[error("{message}")]
    #[diagnostic(code(shoreline::api_error))]
    Api {
        message: String,
        status: Option<u16>,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(shoreline::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("No portal URL configured")]
    #[diagnostic(
        code(shoreline::no_portal),
        help(
            "Run: shoreline config init --portal <URL>\n\
             Or pass --portal / set SHORELINE_PORTAL."
        )
    )]
    NoPortal,

    #[error("Configuration error: {message}")]
    #[diagnostic(code(shoreline::config))]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(shoreline::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PortalUnreachable { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Api {
                status: Some(409), ..
            } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::NoPortal | Self::Config { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::NotFound { entity, identifier } => CliError::NotFound {
                list_command: format!("{}s list", entity.to_lowercase()),
                resource_type: entity,
                identifier,
            },

            CoreError::Api { message, status } => CliError::Api { message, status },

            CoreError::PortalUnreachable { reason } => CliError::PortalUnreachable { reason },

            CoreError::Config { message } => CliError::Config { message },

            CoreError::Internal(message) => CliError::Api {
                message,
                status: None,
            },
        }
    }
}

impl From<shoreline_api::Error> for CliError {
    fn from(err: shoreline_api::Error) -> Self {
        CoreError::from(err).into()
    }
}

impl From<shoreline_config::ConfigError> for CliError {
    fn from(err: shoreline_config::ConfigError) -> Self {
        match err {
            shoreline_config::ConfigError::NoPortal => CliError::NoPortal,
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
