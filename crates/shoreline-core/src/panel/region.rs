// ── Region panel ──

use std::sync::Arc;

use indexmap::IndexMap;
use shoreline_api::PortalClient;
use tracing::debug;

use crate::draft::RegionDraft;
use crate::error::CoreError;
use crate::model::{EntityId, Manager, Region};
use crate::store::{DataStore, StoreEvent};

/// Edit sub-state. At most one region is being edited or having its
/// managers assigned at a time; entering either mode leaves the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionMode {
    #[default]
    Browsing,
    Editing {
        id: EntityId,
        draft: RegionDraft,
        error: Option<String>,
    },
    Assigning {
        region_id: EntityId,
    },
}

/// Controller for the region list.
///
/// Also fetches managers on refresh: the list renders manager badges
/// per region and the assignment panel needs the full manager roster.
pub struct RegionPanel {
    client: PortalClient,
    store: Arc<DataStore>,
    /// Staged input for the create form.
    pub draft: RegionDraft,
    mode: RegionMode,
    loading: bool,
    error: Option<String>,
    form_error: Option<String>,
}

impl RegionPanel {
    pub fn new(client: PortalClient, store: Arc<DataStore>) -> Self {
        Self {
            client,
            store,
            draft: RegionDraft::default(),
            mode: RegionMode::Browsing,
            loading: false,
            error: None,
            form_error: None,
        }
    }

    // ── View state ───────────────────────────────────────────────────

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn mode(&self) -> &RegionMode {
        &self.mode
    }

    pub fn regions(&self) -> Arc<Vec<Arc<Region>>> {
        self.store.regions_snapshot()
    }

    pub fn managers(&self) -> Arc<Vec<Arc<Manager>>> {
        self.store.managers_snapshot()
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Fetch regions and managers concurrently, applying both to the
    /// store only when both succeed. On failure the previous store
    /// state stays visible and the panel error is set.
    pub async fn refresh(&mut self) {
        self.loading = true;
        let (regions_res, managers_res) =
            tokio::join!(self.client.list_regions(), self.client.list_managers());
        self.loading = false;

        match (regions_res, managers_res) {
            (Ok(regions), Ok(managers)) => {
                self.store
                    .replace_regions(regions.into_iter().map(Region::from).collect());
                self.store
                    .replace_managers(managers.into_iter().map(Manager::from).collect());
                self.error = None;
            }
            (Err(e), _) | (_, Err(e)) => {
                self.error = Some(CoreError::from(e).to_string());
            }
        }
    }

    // ── Create ───────────────────────────────────────────────────────

    /// Validate the draft and POST it. On success the returned region
    /// is upserted directly (no re-fetch) and the draft cleared; any
    /// failure surfaces as the form error without touching the list.
    pub async fn create(&mut self) {
        let body = match self.draft.validate_create() {
            Ok(body) => body,
            Err(e) => {
                self.form_error = Some(e.to_string());
                return;
            }
        };

        match self.client.create_region(&body).await {
            Ok(created) => {
                debug!(slug = %created.slug, "region created");
                self.store.upsert_region(Region::from(created));
                self.store.publish(StoreEvent::RegionsChanged);
                self.draft = RegionDraft::default();
                self.form_error = None;
            }
            Err(e) => {
                self.form_error = Some(CoreError::from(e).to_string());
            }
        }
    }

    // ── Inline edit ──────────────────────────────────────────────────

    /// Open the inline editor for a region, pre-filling the draft from
    /// the stored copy. Closes any other open editor or assignment panel.
    pub fn begin_edit(&mut self, id: &EntityId) -> Result<(), CoreError> {
        let region = self
            .store
            .region_by_id(id)
            .ok_or_else(|| CoreError::not_found("Region", id))?;
        self.mode = RegionMode::Editing {
            id: id.clone(),
            draft: RegionDraft::from_region(&region),
            error: None,
        };
        Ok(())
    }

    /// Discard the staged edit. Purely local.
    pub fn cancel_edit(&mut self) {
        self.mode = RegionMode::Browsing;
    }

    /// Access the staged edit draft, if an editor is open.
    pub fn edit_draft_mut(&mut self) -> Option<&mut RegionDraft> {
        match &mut self.mode {
            RegionMode::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Re-validate and PUT the staged edit. Success replaces the single
    /// entity and closes the editor; failure keeps it open with a
    /// row-scoped error.
    pub async fn save_edit(&mut self) {
        let RegionMode::Editing { id, draft, .. } = &self.mode else {
            return;
        };
        let id = id.clone();

        let body = match draft.validate_update() {
            Ok(body) => body,
            Err(e) => {
                self.set_edit_error(e.to_string());
                return;
            }
        };

        match self.client.update_region(id.as_str(), &body).await {
            Ok(updated) => {
                self.store.upsert_region(Region::from(updated));
                self.store.publish(StoreEvent::RegionsChanged);
                self.mode = RegionMode::Browsing;
            }
            Err(e) => self.set_edit_error(CoreError::from(e).to_string()),
        }
    }

    /// PATCH only the locations of a region, leaving the slug alone.
    pub async fn set_locations(
        &mut self,
        id: &EntityId,
        locations: IndexMap<String, String>,
    ) -> Result<(), CoreError> {
        let body = shoreline_api::types::LocationsPatch { locations };
        let updated = self
            .client
            .update_region_locations(id.as_str(), &body)
            .await?;
        self.store.upsert_region(Region::from(updated));
        self.store.publish(StoreEvent::RegionsChanged);
        Ok(())
    }

    // ── Manager assignment ───────────────────────────────────────────

    /// Open the assignment panel for a region.
    pub fn begin_assigning(&mut self, region_id: &EntityId) {
        self.mode = RegionMode::Assigning {
            region_id: region_id.clone(),
        };
    }

    /// Assign or unassign a manager, replacing the stored region with
    /// the server's response. The response carries no updated Manager
    /// shapes, so `ManagersChanged` is published too and the manager
    /// panel re-fetches on its own.
    pub async fn set_manager_assignment(
        &mut self,
        region_id: &EntityId,
        manager_id: &EntityId,
        assigned: bool,
    ) -> Result<(), CoreError> {
        let updated = if assigned {
            self.client
                .assign_manager(region_id.as_str(), manager_id.as_str())
                .await?
        } else {
            self.client
                .unassign_manager(region_id.as_str(), manager_id.as_str())
                .await?
        };
        self.store.upsert_region(Region::from(updated));
        self.store.publish(StoreEvent::RegionsChanged);
        self.store.publish(StoreEvent::ManagersChanged);
        Ok(())
    }

    /// Flip a manager's assignment, with the target state determined by
    /// current membership in the stored region.
    pub async fn toggle_manager(
        &mut self,
        region_id: &EntityId,
        manager_id: &EntityId,
    ) -> Result<(), CoreError> {
        let region = self
            .store
            .region_by_id(region_id)
            .ok_or_else(|| CoreError::not_found("Region", region_id))?;
        let assigned = !region.has_manager(manager_id);
        self.set_manager_assignment(region_id, manager_id, assigned)
            .await
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Delete a region. The server cascades deletion of its incidents,
    /// so `IncidentsChanged` is published alongside `RegionsChanged`.
    /// Confirmation (with the cascade warning) is the caller's job.
    pub async fn delete(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.client.delete_region(id.as_str()).await?;
        self.store.remove_region(id);
        self.store.publish(StoreEvent::RegionsChanged);
        self.store.publish(StoreEvent::IncidentsChanged);
        Ok(())
    }

    // ── Event reaction ───────────────────────────────────────────────

    /// Re-fetch when managers change: the list shows manager badges,
    /// and a rename elsewhere must show up here.
    pub async fn handle_event(&mut self, event: StoreEvent) {
        if event == StoreEvent::ManagersChanged {
            self.refresh().await;
        }
    }

    fn set_edit_error(&mut self, message: String) {
        if let RegionMode::Editing { error, .. } = &mut self.mode {
            *error = Some(message);
        }
    }
}
