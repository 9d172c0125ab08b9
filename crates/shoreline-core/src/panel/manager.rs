// ── Manager panel ──

use std::sync::Arc;

use shoreline_api::PortalClient;
use tracing::debug;

use crate::draft::ManagerDraft;
use crate::error::CoreError;
use crate::model::{EntityId, Manager, Region};
use crate::store::{DataStore, StoreEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ManagerMode {
    #[default]
    Browsing,
    Editing {
        id: EntityId,
        draft: ManagerDraft,
        error: Option<String>,
    },
}

/// Controller for the manager list.
///
/// Fetches regions alongside managers: the create form offers region
/// slugs to attach the new manager to.
pub struct ManagerPanel {
    client: PortalClient,
    store: Arc<DataStore>,
    pub draft: ManagerDraft,
    mode: ManagerMode,
    loading: bool,
    error: Option<String>,
    form_error: Option<String>,
}

impl ManagerPanel {
    pub fn new(client: PortalClient, store: Arc<DataStore>) -> Self {
        Self {
            client,
            store,
            draft: ManagerDraft::default(),
            mode: ManagerMode::Browsing,
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

    pub fn mode(&self) -> &ManagerMode {
        &self.mode
    }

    pub fn managers(&self) -> Arc<Vec<Arc<Manager>>> {
        self.store.managers_snapshot()
    }

    pub fn regions(&self) -> Arc<Vec<Arc<Region>>> {
        self.store.regions_snapshot()
    }

    // ── Refresh ──────────────────────────────────────────────────────

    pub async fn refresh(&mut self) {
        self.loading = true;
        let (managers_res, regions_res) =
            tokio::join!(self.client.list_managers(), self.client.list_regions());
        self.loading = false;

        match (managers_res, regions_res) {
            (Ok(managers), Ok(regions)) => {
                self.store
                    .replace_managers(managers.into_iter().map(Manager::from).collect());
                self.store
                    .replace_regions(regions.into_iter().map(Region::from).collect());
                self.error = None;
            }
            (Err(e), _) | (_, Err(e)) => {
                self.error = Some(CoreError::from(e).to_string());
            }
        }
    }

    // ── Create ───────────────────────────────────────────────────────

    /// Validate and POST the draft. The minimum-one-region rule is
    /// enforced here, before any network call.
    pub async fn create(&mut self) {
        let body = match self.draft.validate_create() {
            Ok(body) => body,
            Err(e) => {
                self.form_error = Some(e.to_string());
                return;
            }
        };

        match self.client.create_manager(&body).await {
            Ok(created) => {
                debug!(name = %created.name, "manager created");
                self.store.upsert_manager(Manager::from(created));
                self.store.publish(StoreEvent::ManagersChanged);
                self.draft = ManagerDraft::default();
                self.form_error = None;
            }
            Err(e) => {
                self.form_error = Some(CoreError::from(e).to_string());
            }
        }
    }

    // ── Inline edit ──────────────────────────────────────────────────

    pub fn begin_edit(&mut self, id: &EntityId) -> Result<(), CoreError> {
        let manager = self
            .store
            .manager_by_id(id)
            .ok_or_else(|| CoreError::not_found("Manager", id))?;
        self.mode = ManagerMode::Editing {
            id: id.clone(),
            draft: ManagerDraft::from_manager(&manager),
            error: None,
        };
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.mode = ManagerMode::Browsing;
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut ManagerDraft> {
        match &mut self.mode {
            ManagerMode::Editing { draft, .. } => Some(draft),
            ManagerMode::Browsing => None,
        }
    }

    /// PUT the staged name/email edit. Region assignments are never
    /// touched here; that goes through the region panel's assignment
    /// operations.
    pub async fn save_edit(&mut self) {
        let ManagerMode::Editing { id, draft, .. } = &self.mode else {
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

        match self.client.update_manager(id.as_str(), &body).await {
            Ok(updated) => {
                self.store.upsert_manager(Manager::from(updated));
                self.store.publish(StoreEvent::ManagersChanged);
                self.mode = ManagerMode::Browsing;
            }
            Err(e) => self.set_edit_error(CoreError::from(e).to_string()),
        }
    }

    // ── Delete ───────────────────────────────────────────────────────

    pub async fn delete(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.client.delete_manager(id.as_str()).await?;
        self.store.remove_manager(id);
        self.store.publish(StoreEvent::ManagersChanged);
        Ok(())
    }

    // ── Event reaction ───────────────────────────────────────────────

    /// Assignment mutations return Region shapes only, so this panel's
    /// view of which regions each manager belongs to goes stale until
    /// it re-fetches on `RegionsChanged`.
    pub async fn handle_event(&mut self, event: StoreEvent) {
        if event == StoreEvent::RegionsChanged {
            self.refresh().await;
        }
    }

    fn set_edit_error(&mut self, message: String) {
        if let ManagerMode::Editing { error, .. } = &mut self.mode {
            *error = Some(message);
        }
    }
}
