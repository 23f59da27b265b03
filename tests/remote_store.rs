//! The HTTP-backed store against a live server.

mod common;

use std::time::Duration;

use common::TestServer;
use pechakucha::model::ValidationError;
use pechakucha::store::{MemoryStore, PresentationStore, RemoteStore, StoreError};

fn client(server: &TestServer) -> RemoteStore {
    RemoteStore::new(server.base_url.clone(), Duration::from_secs(5)).unwrap()
}

#[test]
fn crud_over_http() {
    let server = TestServer::start(MemoryStore::new());
    let store = client(&server);

    assert!(store.list().unwrap().is_empty());

    let created = store.create(common::draft("Remote", 3, 25)).unwrap();
    assert_eq!(created.slide_count(), 3);

    let fetched = store.get(created.id()).unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update(created.id(), common::draft("Remote v2", 2, 45))
        .unwrap()
        .unwrap();
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.slide_duration().seconds(), 45);

    assert!(store.delete(created.id()).unwrap());
    assert!(store.get(created.id()).unwrap().is_none());
    assert!(!store.delete(created.id()).unwrap());
}

#[test]
fn missing_ids_are_none() {
    let server = TestServer::start(MemoryStore::new());
    let store = client(&server);
    assert!(store.get("missing").unwrap().is_none());
    assert!(store
        .update("missing", common::draft("x", 1, 20))
        .unwrap()
        .is_none());
}

#[test]
fn invalid_draft_fails_before_sending() {
    let server = TestServer::start(MemoryStore::new());
    let store = client(&server);
    let err = store.create(common::draft("Bad", 1, 19)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Invalid(ValidationError::InvalidDuration { seconds: 19 })
    ));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn unreachable_server_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let store = RemoteStore::new(format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).unwrap();
    assert!(matches!(store.list(), Err(StoreError::Transport(_))));
}

#[test]
fn ids_cannot_reach_other_routes() {
    let server = TestServer::start(MemoryStore::new());
    let store = client(&server);
    let kept = store.create(common::draft("Kept", 2, 20)).unwrap();
    let id = kept.id();

    assert!(store.get(&format!("{id}?x")).unwrap().is_none());
    assert!(store.get(&format!("{id}#x")).unwrap().is_none());
    assert!(!store.delete(&format!("nope/../{id}")).unwrap());
    assert!(store
        .update(&format!("nope/../{id}"), common::draft("Hijacked", 1, 20))
        .unwrap()
        .is_none());
    for id in ["", ".", ".."] {
        assert!(store.get(id).unwrap().is_none());
        assert!(!store.delete(id).unwrap());
    }

    let still_there = store.get(id).unwrap().unwrap();
    assert_eq!(still_there.title(), "Kept");
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn malformed_server_url_is_rejected() {
    let err = RemoteStore::new("127.0.0.1 5000", Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidUrl { .. }));
}
