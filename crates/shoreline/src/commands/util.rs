//! Shared helpers for command handlers.

use std::path::Path;

use indexmap::IndexMap;
use shoreline_core::parse_locations_json;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Parse repeated `key=label` flags into an ordered locations map.
pub fn parse_location_pairs(pairs: &[String]) -> Result<IndexMap<String, String>, CliError> {
    let mut locations = IndexMap::with_capacity(pairs.len());
    for pair in pairs {
        let Some((key, label)) = pair.split_once('=') else {
            return Err(CliError::Validation {
                field: "location".into(),
                reason: format!("expected KEY=LABEL, got '{pair}'"),
            });
        };
        locations.insert(key.trim().to_owned(), label.trim().to_owned());
    }
    Ok(locations)
}

/// Read a `--locations-json` file through the core parse boundary.
pub fn read_locations_file(path: &Path) -> Result<IndexMap<String, String>, CliError> {
    let contents = std::fs::read_to_string(path)?;
    parse_locations_json(&contents).map_err(|e| CliError::Validation {
        field: "locations-json".into(),
        reason: e.to_string(),
    })
}

/// Format a count with singular/plural noun.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
