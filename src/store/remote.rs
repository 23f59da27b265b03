//! Presentation store backed by a running API server.
//!
//! The terminal viewer is synchronous, so this client owns a small
//! current-thread tokio runtime and blocks on each request. It must not be
//! used from inside another async runtime.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use super::{PresentationStore, StoreError};
use crate::model::{Presentation, PresentationDraft};

#[derive(Debug)]
pub struct RemoteStore {
    base_url: Url,
    client: Client,
    runtime: Runtime,
}

impl RemoteStore {
    /// Build a client for the API rooted at `base_url`
    /// (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let raw = base_url.into();
        let base_url = Url::parse(&raw).map_err(|e| StoreError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidUrl {
                url: raw,
                reason: "URL cannot have a path".to_string(),
            });
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self {
            base_url,
            client,
            runtime,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> Url {
        self.endpoint(&["api", "presentations"])
    }

    /// URL of one presentation, with `id` escaped as a single path segment.
    /// `None` for ids no presentation can have (empty, `.` or `..`).
    fn item_url(&self, id: &str) -> Option<Url> {
        if matches!(id, "" | "." | "..") {
            return None;
        }
        Some(self.endpoint(&["api", "presentations", id]))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so the path is always editable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl RemoteStore {
    async fn fetch_all(&self) -> Result<Vec<Presentation>, StoreError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;
        decode(expect_success(response).await?).await
    }

    async fn fetch_one(&self, id: &str) -> Result<Option<Presentation>, StoreError> {
        let Some(url) = self.item_url(id) else {
            return Ok(None);
        };
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let presentation = decode(expect_success(response).await?).await?;
        Ok(Some(presentation))
    }

    async fn send_create(&self, draft: &PresentationDraft) -> Result<Presentation, StoreError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        decode(expect_success(response).await?).await
    }

    async fn send_update(
        &self,
        id: &str,
        draft: &PresentationDraft,
    ) -> Result<Option<Presentation>, StoreError> {
        let Some(url) = self.item_url(id) else {
            return Ok(None);
        };
        let response = self
            .client
            .patch(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let presentation = decode(expect_success(response).await?).await?;
        Ok(Some(presentation))
    }

    async fn send_delete(&self, id: &str) -> Result<bool, StoreError> {
        let Some(url) = self.item_url(id) else {
            return Ok(false);
        };
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        expect_success(response).await?;
        Ok(true)
    }
}

impl PresentationStore for RemoteStore {
    fn list(&self) -> Result<Vec<Presentation>, StoreError> {
        self.runtime.block_on(self.fetch_all())
    }

    fn get(&self, id: &str) -> Result<Option<Presentation>, StoreError> {
        self.runtime.block_on(self.fetch_one(id))
    }

    fn create(&self, draft: PresentationDraft) -> Result<Presentation, StoreError> {
        draft.validate()?;
        self.runtime.block_on(self.send_create(&draft))
    }

    fn update(
        &self,
        id: &str,
        draft: PresentationDraft,
    ) -> Result<Option<Presentation>, StoreError> {
        draft.validate()?;
        self.runtime.block_on(self.send_update(id, &draft))
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.runtime.block_on(self.send_delete(id))
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

async fn expect_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(base: &str) -> RemoteStore {
        RemoteStore::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn urls_are_built_from_base() {
        for base in ["http://127.0.0.1:5000", "http://127.0.0.1:5000/"] {
            let store = store(base);
            assert_eq!(
                store.collection_url().as_str(),
                "http://127.0.0.1:5000/api/presentations"
            );
            assert_eq!(
                store.item_url("abc").unwrap().as_str(),
                "http://127.0.0.1:5000/api/presentations/abc"
            );
        }
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let store = store("https://example.com/decks/");
        assert_eq!(
            store.item_url("abc").unwrap().as_str(),
            "https://example.com/decks/api/presentations/abc"
        );
    }

    #[test]
    fn ids_are_escaped_as_one_segment() {
        let store = store("http://127.0.0.1:5000");
        for (id, path) in [
            ("abc?x", "/api/presentations/abc%3Fx"),
            ("abc#top", "/api/presentations/abc%23top"),
            ("nope/../abc", "/api/presentations/nope%2F..%2Fabc"),
        ] {
            let url = store.item_url(id).unwrap();
            assert_eq!(url.path(), path, "id {id:?}");
            assert_eq!(url.query(), None);
            assert_eq!(url.fragment(), None);
        }
    }

    #[test]
    fn dot_and_empty_ids_have_no_url() {
        let store = store("http://127.0.0.1:5000");
        for id in ["", ".", ".."] {
            assert!(store.item_url(id).is_none(), "id {id:?}");
        }
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        for base in ["not a url", "mailto:someone@example.com"] {
            assert!(matches!(
                RemoteStore::new(base, Duration::from_secs(1)),
                Err(StoreError::InvalidUrl { .. })
            ));
        }
    }

    #[test]
    fn create_validates_before_sending() {
        // Nothing listens on this port; validation must fail first.
        let store = RemoteStore::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let err = store
            .create(PresentationDraft::new("", vec!["x".into()]))
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }
}
