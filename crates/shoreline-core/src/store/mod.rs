// ── Central reactive data store ──
//
// Thread-safe storage for all portal entities. Collections are caches
// of server state with no TTL; correctness comes from the
// re-fetch-on-event discipline the panels follow.

pub(crate) mod collection;
pub mod event;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};

use crate::model::{EntityId, Incident, Lifeguard, Manager, Region};
use collection::{EntityCollection, Keyed};
pub use event::StoreEvent;

const EVENT_CHANNEL_SIZE: usize = 64;

/// Display label used when a foreign key cannot be resolved locally.
/// A purely cosmetic degradation, never a data error.
pub const UNKNOWN_REGION_LABEL: &str = "Unknown";

impl Keyed for Region {
    fn key(&self) -> &EntityId {
        &self.id
    }
    fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

impl Keyed for Manager {
    fn key(&self) -> &EntityId {
        &self.id
    }
    fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

impl Keyed for Lifeguard {
    fn key(&self) -> &EntityId {
        &self.id
    }
    fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

impl Keyed for Incident {
    fn key(&self) -> &EntityId {
        &self.id
    }
    fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

/// Central reactive store for all portal entities.
///
/// One rule governs every mutation path: *apply the server response,
/// then publish a typed [`StoreEvent`]*. Panels that derive display
/// data from a sibling collection subscribe and re-fetch selectively.
/// Bulk refreshes apply silently — they are reactions, not mutations,
/// and announcing them would loop the bus.
pub struct DataStore {
    regions: EntityCollection<Region>,
    managers: EntityCollection<Manager>,
    lifeguards: EntityCollection<Lifeguard>,
    incidents: EntityCollection<Incident>,
    events: broadcast::Sender<StoreEvent>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_SIZE);
        let (last_refresh, _) = watch::channel(None);

        Self {
            regions: EntityCollection::new(),
            managers: EntityCollection::new(),
            lifeguards: EntityCollection::new(),
            incidents: EntityCollection::new(),
            events,
            last_refresh,
        }
    }

    // ── Event bus ────────────────────────────────────────────────────

    /// Subscribe to mutation announcements.
    pub fn subscribe_events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Announce a successful mutation. Lagging or absent receivers are
    /// not an error.
    pub fn publish(&self, event: StoreEvent) {
        let _ = self.events.send(event);
    }

    // ── Bulk application (refresh path, silent) ──────────────────────

    pub fn replace_regions(&self, regions: Vec<Region>) {
        self.regions.replace_all(regions);
        self.mark_refreshed();
    }

    pub fn replace_managers(&self, managers: Vec<Manager>) {
        self.managers.replace_all(managers);
        self.mark_refreshed();
    }

    pub fn replace_lifeguards(&self, lifeguards: Vec<Lifeguard>) {
        self.lifeguards.replace_all(lifeguards);
        self.mark_refreshed();
    }

    pub fn replace_incidents(&self, incidents: Vec<Incident>) {
        self.incidents.replace_all(incidents);
        self.mark_refreshed();
    }

    // ── Single-entity application (mutation path) ────────────────────

    pub fn upsert_region(&self, region: Region) {
        self.regions.upsert(region);
    }

    pub fn upsert_manager(&self, manager: Manager) {
        self.managers.upsert(manager);
    }

    pub fn upsert_lifeguard(&self, lifeguard: Lifeguard) {
        self.lifeguards.upsert(lifeguard);
    }

    pub fn remove_region(&self, id: &EntityId) -> Option<Arc<Region>> {
        self.regions.remove(id)
    }

    pub fn remove_manager(&self, id: &EntityId) -> Option<Arc<Manager>> {
        self.managers.remove(id)
    }

    pub fn remove_lifeguard(&self, id: &EntityId) -> Option<Arc<Lifeguard>> {
        self.lifeguards.remove(id)
    }

    pub fn remove_incident(&self, id: &EntityId) -> Option<Arc<Incident>> {
        self.incidents.remove(id)
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn regions_snapshot(&self) -> Arc<Vec<Arc<Region>>> {
        self.regions.snapshot()
    }

    pub fn managers_snapshot(&self) -> Arc<Vec<Arc<Manager>>> {
        self.managers.snapshot()
    }

    pub fn lifeguards_snapshot(&self) -> Arc<Vec<Arc<Lifeguard>>> {
        self.lifeguards.snapshot()
    }

    pub fn incidents_snapshot(&self) -> Arc<Vec<Arc<Incident>>> {
        self.incidents.snapshot()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_regions(&self) -> watch::Receiver<Arc<Vec<Arc<Region>>>> {
        self.regions.subscribe()
    }

    pub fn subscribe_managers(&self) -> watch::Receiver<Arc<Vec<Arc<Manager>>>> {
        self.managers.subscribe()
    }

    pub fn subscribe_lifeguards(&self) -> watch::Receiver<Arc<Vec<Arc<Lifeguard>>>> {
        self.lifeguards.subscribe()
    }

    pub fn subscribe_incidents(&self) -> watch::Receiver<Arc<Vec<Arc<Incident>>>> {
        self.incidents.subscribe()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn region_by_id(&self, id: &EntityId) -> Option<Arc<Region>> {
        self.regions.get(id)
    }

    pub fn region_by_slug(&self, slug: &str) -> Option<Arc<Region>> {
        self.regions.find(|r| r.slug == slug)
    }

    pub fn manager_by_id(&self, id: &EntityId) -> Option<Arc<Manager>> {
        self.managers.get(id)
    }

    pub fn lifeguard_by_id(&self, id: &EntityId) -> Option<Arc<Lifeguard>> {
        self.lifeguards.get(id)
    }

    pub fn lifeguard_by_phone(&self, phone: &str) -> Option<Arc<Lifeguard>> {
        self.lifeguards.find(|l| l.phone == phone)
    }

    pub fn incident_by_id(&self, id: &EntityId) -> Option<Arc<Incident>> {
        self.incidents.get(id)
    }

    /// Resolve a region id to its slug for display, degrading to
    /// [`UNKNOWN_REGION_LABEL`] when the region is not loaded locally.
    pub fn region_label(&self, id: &EntityId) -> String {
        self.region_by_id(id)
            .map_or_else(|| UNKNOWN_REGION_LABEL.to_owned(), |r| r.slug.clone())
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }

    pub fn lifeguard_count(&self) -> usize {
        self.lifeguards.len()
    }

    pub fn incident_count(&self) -> usize {
        self.incidents.len()
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    fn mark_refreshed(&self) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.last_refresh.send_modify(|t| *t = Some(Utc::now()));
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
