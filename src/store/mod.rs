//! Presentation storage.
//!
//! The playback engine only ever needs `get`; the full CRUD surface exists for
//! the HTTP API and the command-line tools. Two implementations share the
//! [`PresentationStore`] trait: an in-process [`MemoryStore`] and a
//! [`RemoteStore`] that talks to a running API server.

mod memory;
mod remote;
mod seed;

pub use memory::MemoryStore;
pub use remote::RemoteStore;
pub use seed::sample_presentation;

use thiserror::Error;

use crate::model::{Presentation, PresentationDraft, ValidationError};

/// Errors surfaced by a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid presentation data: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Could not reach presentation server: {0}")]
    Transport(String),

    #[error("Presentation server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from presentation server: {0}")]
    Decode(String),
}

/// Durable or in-memory mapping from presentation id to document.
pub trait PresentationStore: Send + Sync {
    /// All presentations in creation order.
    fn list(&self) -> Result<Vec<Presentation>, StoreError>;

    /// `Ok(None)` when no presentation has this id.
    fn get(&self, id: &str) -> Result<Option<Presentation>, StoreError>;

    /// Validate and store a new presentation under a fresh id.
    fn create(&self, draft: PresentationDraft) -> Result<Presentation, StoreError>;

    /// Replace the contents of an existing presentation, keeping its id.
    /// `Ok(None)` when the id is unknown.
    fn update(&self, id: &str, draft: PresentationDraft)
        -> Result<Option<Presentation>, StoreError>;

    /// `Ok(false)` when the id is unknown.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
