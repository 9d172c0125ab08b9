//! Shared configuration for Shoreline tools.
//!
//! A single TOML file merged with `SHORELINE_*` environment overrides,
//! resolved into validated portal settings for the transport layer.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no portal URL configured (set `portal` in the config file or SHORELINE_PORTAL)")]
    NoPortal,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Portal base URL (e.g., "https://portal.example.org/api").
    pub portal: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Accept self-signed portal certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Resolved settings ───────────────────────────────────────────────

/// Validated settings handed to the transport layer.
#[derive(Debug, Clone)]
pub struct PortalSettings {
    pub url: Url,
    pub timeout: Duration,
    pub insecure: bool,
}

impl Config {
    /// Validate and resolve into [`PortalSettings`].
    ///
    /// `portal_override` (typically a CLI flag) beats the file and
    /// environment values.
    pub fn resolve(&self, portal_override: Option<&str>) -> Result<PortalSettings, ConfigError> {
        let raw = portal_override
            .map(str::to_owned)
            .or_else(|| self.portal.clone())
            .ok_or(ConfigError::NoPortal)?;

        let url: Url = raw.parse().map_err(|_| ConfigError::Validation {
            field: "portal".into(),
            reason: format!("invalid URL: {raw}"),
        })?;

        Ok(PortalSettings {
            url,
            timeout: Duration::from_secs(self.defaults.timeout),
            insecure: self.defaults.insecure,
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "shoreline", "shoreline").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shoreline");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path, still applying environment overrides.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHORELINE_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_requires_a_portal_url() {
        let cfg = Config::default();
        assert!(matches!(cfg.resolve(None), Err(ConfigError::NoPortal)));
    }

    #[test]
    fn override_beats_file_value() {
        let cfg = Config {
            portal: Some("https://file.example.org".into()),
            defaults: Defaults::default(),
        };
        let settings = cfg.resolve(Some("https://flag.example.org")).unwrap();
        assert_eq!(settings.url.as_str(), "https://flag.example.org/");
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_url_is_a_validation_error() {
        let cfg = Config {
            portal: Some("not a url".into()),
            defaults: Defaults::default(),
        };
        assert!(matches!(
            cfg.resolve(None),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn file_values_load_through_figment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "portal = \"https://portal.example.org\"\n[defaults]\ntimeout = 5\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        let settings = cfg.resolve(None).unwrap();
        assert_eq!(settings.url.host_str(), Some("portal.example.org"));
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }
}
