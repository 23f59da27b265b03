//! In-process presentation store.

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use super::{sample_presentation, PresentationStore, StoreError};
use crate::model::{Presentation, PresentationDraft};

/// Thread-safe, insertion-ordered in-memory store.
///
/// Cloning shares the underlying storage, so one instance can back both the
/// HTTP router and a local viewer.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Vec<Presentation>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the bundled sample deck.
    pub fn seeded() -> Self {
        let store = Self::new();
        match store.create(sample_presentation()) {
            Ok(sample) => tracing::debug!(id = sample.id(), "Seeded sample presentation"),
            Err(err) => tracing::warn!("Sample presentation rejected: {}", err),
        }
        store
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl PresentationStore for MemoryStore {
    fn list(&self) -> Result<Vec<Presentation>, StoreError> {
        Ok(self.inner.read().clone())
    }

    fn get(&self, id: &str) -> Result<Option<Presentation>, StoreError> {
        Ok(self.inner.read().iter().find(|p| p.id() == id).cloned())
    }

    fn create(&self, draft: PresentationDraft) -> Result<Presentation, StoreError> {
        let presentation = Presentation::new(Uuid::new_v4().to_string(), draft)?;
        self.inner.write().push(presentation.clone());
        Ok(presentation)
    }

    fn update(
        &self,
        id: &str,
        draft: PresentationDraft,
    ) -> Result<Option<Presentation>, StoreError> {
        let updated = Presentation::new(id, draft)?;
        let mut guard = self.inner.write();
        let Some(slot) = guard.iter_mut().find(|p| p.id() == id) else {
            return Ok(None);
        };
        *slot = updated.clone();
        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut guard = self.inner.write();
        let before = guard.len();
        guard.retain(|p| p.id() != id);
        Ok(guard.len() != before)
    }
}
