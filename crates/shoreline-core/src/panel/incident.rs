// ── Incident panel ──

use std::collections::HashSet;
use std::sync::Arc;

use shoreline_api::PortalClient;
use tracing::debug;

use crate::error::CoreError;
use crate::grouping::{group_incidents, IncidentFilters, IncidentGroup};
use crate::model::{EntityId, Incident, Region};
use crate::store::{DataStore, StoreEvent};

/// Controller for the incident list.
///
/// Read-and-delete only; incidents are filed elsewhere. The region
/// collection is fetched for label resolution and never mutated here.
/// The grouped view is derived from scratch on every call, so there is
/// no projection state to keep in sync.
pub struct IncidentPanel {
    client: PortalClient,
    store: Arc<DataStore>,
    /// Active filter predicates, combined with AND semantics.
    pub filters: IncidentFilters,
    /// Group ids currently expanded. Default collapsed.
    expanded: HashSet<String>,
    loading: bool,
    error: Option<String>,
}

impl IncidentPanel {
    pub fn new(client: PortalClient, store: Arc<DataStore>) -> Self {
        Self {
            client,
            store,
            filters: IncidentFilters::default(),
            expanded: HashSet::new(),
            loading: false,
            error: None,
        }
    }

    // ── View state ───────────────────────────────────────────────────

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn regions(&self) -> Arc<Vec<Arc<Region>>> {
        self.store.regions_snapshot()
    }

    /// Region label for a row, degrading to "Unknown".
    pub fn region_label(&self, incident: &Incident) -> String {
        self.store.region_label(&incident.region_id)
    }

    /// The grouped, filtered, sorted projection of the flat collection.
    pub fn grouped(&self) -> Vec<IncidentGroup> {
        group_incidents(&self.store.incidents_snapshot(), &self.filters)
    }

    // ── Refresh ──────────────────────────────────────────────────────

    pub async fn refresh(&mut self) {
        self.loading = true;
        let (incidents_res, regions_res) =
            tokio::join!(self.client.list_incidents(), self.client.list_regions());
        self.loading = false;

        match (incidents_res, regions_res) {
            (Ok(incidents), Ok(regions)) => {
                self.store
                    .replace_incidents(incidents.into_iter().map(Incident::from).collect());
                self.store
                    .replace_regions(regions.into_iter().map(Region::from).collect());
                self.error = None;
            }
            (Err(e), _) | (_, Err(e)) => {
                self.error = Some(CoreError::from(e).to_string());
            }
        }
    }

    // ── Expansion ────────────────────────────────────────────────────

    /// Flip a group open or closed. Purely local, no network effect.
    pub fn toggle_group(&mut self, group_id: &str) {
        if !self.expanded.remove(group_id) {
            self.expanded.insert(group_id.to_owned());
        }
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded.contains(group_id)
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Delete a single incident, removing only that report from local
    /// state. A group disappears from the projection once its last
    /// member is gone; its stale expansion entry is dropped then too.
    pub async fn delete_incident(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.client.delete_incident(id.as_str()).await?;
        let removed = self.store.remove_incident(id);

        if let Some(incident) = removed {
            let group_alive = self
                .store
                .incidents_snapshot()
                .iter()
                .any(|i| i.group_id == incident.group_id);
            if !group_alive {
                self.expanded.remove(&incident.group_id);
            }
            debug!(group = %incident.group_id, "incident deleted");
        }

        self.store.publish(StoreEvent::IncidentsChanged);
        Ok(())
    }

    // ── Event reaction ───────────────────────────────────────────────

    /// Re-fetch on region changes (labels, cascaded deletions) and on
    /// incident changes made outside this panel instance.
    pub async fn handle_event(&mut self, event: StoreEvent) {
        if matches!(
            event,
            StoreEvent::RegionsChanged | StoreEvent::IncidentsChanged
        ) {
            self.refresh().await;
        }
    }
}
