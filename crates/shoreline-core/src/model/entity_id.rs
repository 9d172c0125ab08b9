// ── Core identity type ──
//
// Every portal entity carries a server-assigned opaque identifier.
// Clients never mint ids; they only echo back what the server handed out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque server-assigned identifier for any portal entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        let id = EntityId::from("r-42");
        assert_eq!(id.to_string(), "r-42");
        assert_eq!(id.as_str(), "r-42");
    }

    #[test]
    fn parses_from_str() {
        let id: EntityId = "abc123".parse().unwrap();
        assert_eq!(id, EntityId::from("abc123"));
    }
}
