// ── Lifeguard panel ──

use std::sync::Arc;

use shoreline_api::PortalClient;
use tracing::debug;

use crate::draft::LifeguardDraft;
use crate::error::CoreError;
use crate::model::{EntityId, Lifeguard, Region};
use crate::store::{DataStore, StoreEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LifeguardMode {
    #[default]
    Browsing,
    Editing {
        id: EntityId,
        draft: LifeguardDraft,
        error: Option<String>,
    },
}

/// Controller for the lifeguard list.
///
/// Regions are fetched alongside lifeguards so each row can resolve
/// its region id to a slug label; the store degrades to "Unknown" for
/// ids that are not loaded.
pub struct LifeguardPanel {
    client: PortalClient,
    store: Arc<DataStore>,
    pub draft: LifeguardDraft,
    mode: LifeguardMode,
    loading: bool,
    error: Option<String>,
    form_error: Option<String>,
}

impl LifeguardPanel {
    pub fn new(client: PortalClient, store: Arc<DataStore>) -> Self {
        Self {
            client,
            store,
            draft: LifeguardDraft::default(),
            mode: LifeguardMode::Browsing,
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

    pub fn mode(&self) -> &LifeguardMode {
        &self.mode
    }

    pub fn lifeguards(&self) -> Arc<Vec<Arc<Lifeguard>>> {
        self.store.lifeguards_snapshot()
    }

    pub fn regions(&self) -> Arc<Vec<Arc<Region>>> {
        self.store.regions_snapshot()
    }

    /// Region label for a row, degrading to "Unknown".
    pub fn region_label(&self, lifeguard: &Lifeguard) -> String {
        self.store.region_label(&lifeguard.region_id)
    }

    // ── Refresh ──────────────────────────────────────────────────────

    pub async fn refresh(&mut self) {
        self.loading = true;
        let (lifeguards_res, regions_res) =
            tokio::join!(self.client.list_lifeguards(), self.client.list_regions());
        self.loading = false;

        match (lifeguards_res, regions_res) {
            (Ok(lifeguards), Ok(regions)) => {
                self.store
                    .replace_lifeguards(lifeguards.into_iter().map(Lifeguard::from).collect());
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

    pub async fn create(&mut self) {
        let body = match self.draft.validate_create() {
            Ok(body) => body,
            Err(e) => {
                self.form_error = Some(e.to_string());
                return;
            }
        };

        match self.client.create_lifeguard(&body).await {
            Ok(created) => {
                debug!(name = %created.name, "lifeguard created");
                self.store.upsert_lifeguard(Lifeguard::from(created));
                self.store.publish(StoreEvent::LifeguardsChanged);
                self.draft = LifeguardDraft::default();
                self.form_error = None;
            }
            Err(e) => {
                self.form_error = Some(CoreError::from(e).to_string());
            }
        }
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Look a lifeguard up by phone number via the dedicated endpoint,
    /// upserting the result so it is present locally afterwards.
    pub async fn find_by_phone(&mut self, phone: &str) -> Result<Arc<Lifeguard>, CoreError> {
        match self.client.get_lifeguard_by_phone(phone).await {
            Ok(found) => {
                let lifeguard = Lifeguard::from(found);
                self.store.upsert_lifeguard(lifeguard.clone());
                Ok(Arc::new(lifeguard))
            }
            Err(e) if e.is_not_found() => Err(CoreError::not_found("Lifeguard", phone)),
            Err(e) => Err(e.into()),
        }
    }

    // ── Inline edit ──────────────────────────────────────────────────

    pub fn begin_edit(&mut self, id: &EntityId) -> Result<(), CoreError> {
        let lifeguard = self
            .store
            .lifeguard_by_id(id)
            .ok_or_else(|| CoreError::not_found("Lifeguard", id))?;
        self.mode = LifeguardMode::Editing {
            id: id.clone(),
            draft: LifeguardDraft::from_lifeguard(&lifeguard),
            error: None,
        };
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.mode = LifeguardMode::Browsing;
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut LifeguardDraft> {
        match &mut self.mode {
            LifeguardMode::Editing { draft, .. } => Some(draft),
            LifeguardMode::Browsing => None,
        }
    }

    /// PUT the staged name/phone edit. A lifeguard's region is fixed at
    /// creation; updates never move it.
    pub async fn save_edit(&mut self) {
        let LifeguardMode::Editing { id, draft, .. } = &self.mode else {
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

        match self.client.update_lifeguard(id.as_str(), &body).await {
            Ok(updated) => {
                self.store.upsert_lifeguard(Lifeguard::from(updated));
                self.store.publish(StoreEvent::LifeguardsChanged);
                self.mode = LifeguardMode::Browsing;
            }
            Err(e) => self.set_edit_error(CoreError::from(e).to_string()),
        }
    }

    // ── Delete ───────────────────────────────────────────────────────

    pub async fn delete(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.client.delete_lifeguard(id.as_str()).await?;
        self.store.remove_lifeguard(id);
        self.store.publish(StoreEvent::LifeguardsChanged);
        Ok(())
    }

    // ── Event reaction ───────────────────────────────────────────────

    /// Region labels come from the region collection, so a region
    /// rename or delete elsewhere triggers a re-fetch here.
    pub async fn handle_event(&mut self, event: StoreEvent) {
        if event == StoreEvent::RegionsChanged {
            self.refresh().await;
        }
    }

    fn set_edit_error(&mut self, message: String) {
        if let LifeguardMode::Editing { error, .. } = &mut self.mode {
            *error = Some(message);
        }
    }
}
