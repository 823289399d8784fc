//! In-memory engagement store.
//!
//! The core never persists anything; this store is the API layer's stand-in
//! for the external persistence collaborator.

use dashmap::DashMap;
use uuid::Uuid;

use attest_core::workflow::Engagement;

/// Concurrent in-memory map of engagements.
#[derive(Debug, Default)]
pub struct EngagementStore {
    inner: DashMap<Uuid, Engagement>,
}

impl EngagementStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an engagement, replacing any previous entry with the same id.
    pub fn insert(&self, engagement: Engagement) {
        self.inner.insert(engagement.id, engagement);
    }

    /// Returns a copy of the engagement, if present.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<Engagement> {
        self.inner.get(&id).map(|entry| entry.clone())
    }

    /// Returns true if the engagement exists.
    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.inner.contains_key(&id)
    }

    /// All engagements, ordered by creation time.
    #[must_use]
    pub fn list(&self) -> Vec<Engagement> {
        let mut engagements: Vec<_> = self.inner.iter().map(|entry| entry.clone()).collect();
        engagements.sort_by_key(|e| (e.created_at, e.id));
        engagements
    }

    /// Applies `apply` to the stored engagement under the map's entry lock.
    ///
    /// Returns `None` when the engagement does not exist.
    pub fn update<F, T>(&self, id: Uuid, apply: F) -> Option<T>
    where
        F: FnOnce(&mut Engagement) -> T,
    {
        self.inner.get_mut(&id).map(|mut entry| apply(&mut entry))
    }
}
