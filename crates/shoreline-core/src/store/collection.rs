// ── Generic reactive entity collection ──
//
// Concurrent storage keyed by EntityId with push-based change
// notification via `watch` channels.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::watch;

use crate::model::EntityId;

/// Implemented by every domain type held in an [`EntityCollection`].
pub trait Keyed {
    fn key(&self) -> &EntityId;
    /// Server-side creation time, used to keep snapshots in a stable
    /// oldest-first order.
    fn created(&self) -> DateTime<Utc>;
}

/// A reactive collection for a single entity type.
///
/// `DashMap` gives O(1) concurrent lookups; every mutation rebuilds the
/// snapshot broadcast to `watch` subscribers. Snapshots are ordered by
/// creation time so freshly created entities appear at the end of a
/// list, matching append-on-create semantics.
pub(crate) struct EntityCollection<T: Keyed + Send + Sync + 'static> {
    by_id: DashMap<EntityId, Arc<T>>,
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Keyed + Send + Sync + 'static> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            by_id: DashMap::new(),
            snapshot,
        }
    }

    /// Insert or update an entity. Returns `true` if the id was new.
    pub(crate) fn upsert(&self, entity: T) -> bool {
        let id = entity.key().clone();
        let is_new = !self.by_id.contains_key(&id);
        self.by_id.insert(id, Arc::new(entity));
        self.rebuild_snapshot();
        is_new
    }

    /// Remove an entity by id. Returns the removed entity if it existed.
    pub(crate) fn remove(&self, id: &EntityId) -> Option<Arc<T>> {
        let removed = self.by_id.remove(id).map(|(_, v)| v);
        if removed.is_some() {
            self.rebuild_snapshot();
        }
        removed
    }

    /// Replace the whole collection with an incoming set.
    ///
    /// Upserts first, then prunes ids absent from the incoming set.
    /// This avoids the brief empty state a clear-then-insert would cause.
    pub(crate) fn replace_all(&self, items: Vec<T>) {
        let incoming: Vec<EntityId> = items.iter().map(|e| e.key().clone()).collect();
        for item in items {
            let id = item.key().clone();
            self.by_id.insert(id, Arc::new(item));
        }
        self.by_id
            .retain(|existing, _| incoming.contains(existing));
        self.rebuild_snapshot();
    }

    pub(crate) fn get(&self, id: &EntityId) -> Option<Arc<T>> {
        self.by_id.get(id).map(|r| Arc::clone(r.value()))
    }

    /// Linear scan for the first entity matching a predicate.
    pub(crate) fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Arc<T>> {
        self.by_id
            .iter()
            .find(|r| pred(r.value()))
            .map(|r| Arc::clone(r.value()))
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Collect all values, sort by (created, id), broadcast.
    fn rebuild_snapshot(&self) {
        let mut values: Vec<Arc<T>> = self.by_id.iter().map(|r| Arc::clone(r.value())).collect();
        values.sort_by(|a, b| {
            a.created()
                .cmp(&b.created())
                .then_with(|| a.key().as_str().cmp(b.key().as_str()))
        });
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Item {
        id: EntityId,
        created: DateTime<Utc>,
    }

    impl Keyed for Item {
        fn key(&self) -> &EntityId {
            &self.id
        }
        fn created(&self) -> DateTime<Utc> {
            self.created
        }
    }

    fn item(id: &str, hour: u32) -> Item {
        Item {
            id: EntityId::from(id),
            created: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn upsert_returns_true_for_new_id() {
        let col: EntityCollection<Item> = EntityCollection::new();
        assert!(col.upsert(item("a", 1)));
        assert!(!col.upsert(item("a", 2)));
    }

    #[test]
    fn snapshot_is_ordered_by_creation_time() {
        let col: EntityCollection<Item> = EntityCollection::new();
        col.upsert(item("late", 9));
        col.upsert(item("early", 1));

        let snap = col.snapshot();
        assert_eq!(snap[0].id.as_str(), "early");
        assert_eq!(snap[1].id.as_str(), "late");
    }

    #[test]
    fn replace_all_prunes_missing_ids() {
        let col: EntityCollection<Item> = EntityCollection::new();
        col.upsert(item("a", 1));
        col.upsert(item("b", 2));

        col.replace_all(vec![item("b", 2), item("c", 3)]);

        assert!(col.get(&EntityId::from("a")).is_none());
        assert!(col.get(&EntityId::from("b")).is_some());
        assert!(col.get(&EntityId::from("c")).is_some());
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn remove_updates_snapshot() {
        let col: EntityCollection<Item> = EntityCollection::new();
        col.upsert(item("a", 1));
        let removed = col.remove(&EntityId::from("a"));
        assert!(removed.is_some());
        assert!(col.snapshot().is_empty());
        assert!(col.remove(&EntityId::from("a")).is_none());
    }
}
