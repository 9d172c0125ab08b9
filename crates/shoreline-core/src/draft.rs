// ── Form drafts and client-side validation ──
//
// Drafts stage user input for create/edit flows. `validate()` runs
// before any network call and produces the wire body; a failing draft
// is left untouched so the user can correct it in place.

use indexmap::IndexMap;
use shoreline_api::types::{
    LifeguardCreate, LifeguardUpdate, ManagerCreate, ManagerUpdate, RegionCreate, RegionUpdate,
};
use thiserror::Error;

use crate::error::CoreError;
use crate::model::{EntityId, Lifeguard, Manager, Region};

// ── Region ───────────────────────────────────────────────────────────

/// Staged input for creating or editing a region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionDraft {
    pub slug: String,
    /// Ordered key/label pairs as entered; blank-key rows are dropped
    /// during validation rather than rejected individually.
    pub locations: Vec<(String, String)>,
}

impl RegionDraft {
    pub fn from_region(region: &Region) -> Self {
        Self {
            slug: region.slug.clone(),
            locations: region
                .locations
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Validate and build the create body. Requires a non-empty slug and
    /// at least one location with a non-empty key.
    pub fn validate_create(&self) -> Result<RegionCreate, CoreError> {
        Ok(RegionCreate {
            slug: self.validated_slug()?,
            locations: self.validated_locations()?,
            managers: None,
        })
    }

    pub fn validate_update(&self) -> Result<RegionUpdate, CoreError> {
        Ok(RegionUpdate {
            slug: Some(self.validated_slug()?),
            locations: Some(self.validated_locations()?),
        })
    }

    fn validated_slug(&self) -> Result<String, CoreError> {
        let slug = self.slug.trim();
        if slug.is_empty() {
            return Err(CoreError::validation("region slug must not be empty"));
        }
        Ok(slug.to_owned())
    }

    fn validated_locations(&self) -> Result<IndexMap<String, String>, CoreError> {
        let locations: IndexMap<String, String> = self
            .locations
            .iter()
            .filter(|(key, _)| !key.trim().is_empty())
            .map(|(key, label)| (key.trim().to_owned(), label.trim().to_owned()))
            .collect();
        if locations.is_empty() {
            return Err(CoreError::validation(
                "a region needs at least one location",
            ));
        }
        Ok(locations)
    }
}

// ── Manager ──────────────────────────────────────────────────────────

/// Staged input for creating or editing a manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerDraft {
    pub name: String,
    pub email: String,
    /// Region slugs the new manager is attached to. Only meaningful at
    /// creation time; edits never touch assignments.
    pub region_slugs: Vec<String>,
}

impl ManagerDraft {
    pub fn from_manager(manager: &Manager) -> Self {
        Self {
            name: manager.name.clone(),
            email: manager.email.clone(),
            region_slugs: manager.regions.iter().map(|r| r.slug.clone()).collect(),
        }
    }

    pub fn validate_create(&self) -> Result<ManagerCreate, CoreError> {
        let (name, email) = self.validated_identity()?;
        let region_slugs: Vec<String> = self
            .region_slugs
            .iter()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();
        if region_slugs.is_empty() {
            return Err(CoreError::validation(
                "a manager must be assigned to at least one region",
            ));
        }
        Ok(ManagerCreate {
            name,
            email,
            region_slugs,
        })
    }

    pub fn validate_update(&self) -> Result<ManagerUpdate, CoreError> {
        let (name, email) = self.validated_identity()?;
        Ok(ManagerUpdate { name, email })
    }

    fn validated_identity(&self) -> Result<(String, String), CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("manager name must not be empty"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CoreError::validation("manager email must not be empty"));
        }
        Ok((name.to_owned(), email.to_owned()))
    }
}

// ── Lifeguard ────────────────────────────────────────────────────────

/// Staged input for creating or editing a lifeguard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeguardDraft {
    pub name: String,
    pub phone: String,
    pub region_id: Option<EntityId>,
}

impl LifeguardDraft {
    pub fn from_lifeguard(lifeguard: &Lifeguard) -> Self {
        Self {
            name: lifeguard.name.clone(),
            phone: lifeguard.phone.clone(),
            region_id: Some(lifeguard.region_id.clone()),
        }
    }

    pub fn validate_create(&self) -> Result<LifeguardCreate, CoreError> {
        let (name, phone) = self.validated_identity()?;
        let region_id = self
            .region_id
            .as_ref()
            .ok_or_else(|| CoreError::validation("a lifeguard must belong to a region"))?;
        Ok(LifeguardCreate {
            name,
            phone,
            region_id: region_id.as_str().to_owned(),
        })
    }

    pub fn validate_update(&self) -> Result<LifeguardUpdate, CoreError> {
        let (name, phone) = self.validated_identity()?;
        Ok(LifeguardUpdate { name, phone })
    }

    fn validated_identity(&self) -> Result<(String, String), CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("lifeguard name must not be empty"));
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(CoreError::validation("lifeguard phone must not be empty"));
        }
        Ok((name.to_owned(), phone.to_owned()))
    }
}

// ── Raw-JSON locations boundary ──────────────────────────────────────

/// Failure parsing a raw-JSON locations blob.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationsParseError {
    #[error("locations must be valid JSON: {0}")]
    Syntax(String),
    #[error("locations must be a JSON object of string values")]
    NotAnObject,
    #[error("location {key:?} has a non-string value")]
    NonStringValue { key: String },
}

/// Parse a user-supplied JSON blob into a locations map.
///
/// This is an explicit parse boundary: malformed input comes back as a
/// tagged error, never a panic, so callers can surface it inline next
/// to the input field or flag it came from. Key order is preserved.
pub fn parse_locations_json(raw: &str) -> Result<IndexMap<String, String>, LocationsParseError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| LocationsParseError::Syntax(e.to_string()))?;
    let serde_json::Value::Object(map) = value else {
        return Err(LocationsParseError::NotAnObject);
    };
    let mut locations = IndexMap::with_capacity(map.len());
    for (key, value) in map {
        let serde_json::Value::String(label) = value else {
            return Err(LocationsParseError::NonStringValue { key });
        };
        locations.insert(key, label);
    }
    Ok(locations)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn region_draft_rejects_empty_locations() {
        let draft = RegionDraft {
            slug: "north".into(),
            locations: vec![],
        };
        let err = draft.validate_create().unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
    }

    #[test]
    fn region_draft_drops_blank_keys_but_needs_one_survivor() {
        let draft = RegionDraft {
            slug: "north".into(),
            locations: vec![(String::new(), "ignored".into()), ("a".into(), "Pool A".into())],
        };
        let body = draft.validate_create().unwrap();
        assert_eq!(body.locations.len(), 1);
        assert_eq!(body.locations["a"], "Pool A");

        let all_blank = RegionDraft {
            slug: "north".into(),
            locations: vec![("  ".into(), "x".into())],
        };
        assert!(all_blank.validate_create().is_err());
    }

    #[test]
    fn manager_draft_requires_a_region_slug() {
        let draft = ManagerDraft {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            region_slugs: vec!["  ".into()],
        };
        assert!(draft.validate_create().is_err());
    }

    #[test]
    fn lifeguard_draft_requires_region() {
        let draft = LifeguardDraft {
            name: "Sam".into(),
            phone: "555-0100".into(),
            region_id: None,
        };
        assert!(draft.validate_create().is_err());
    }

    #[test]
    fn parse_locations_accepts_object_of_strings() {
        let parsed = parse_locations_json(r#"{"a": "Pool A", "b": "Pool B"}"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["a"], "Pool A");
    }

    #[test]
    fn parse_locations_rejects_non_object() {
        assert_eq!(
            parse_locations_json(r#"["a"]"#),
            Err(LocationsParseError::NotAnObject)
        );
        assert!(matches!(
            parse_locations_json("{not json"),
            Err(LocationsParseError::Syntax(_))
        ));
        assert_eq!(
            parse_locations_json(r#"{"a": 1}"#),
            Err(LocationsParseError::NonStringValue { key: "a".into() })
        );
    }
}
