//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use pechakucha::model::{Presentation, PresentationDraft};
use pechakucha::server::{ApiHandle, ApiServer};
use pechakucha::store::{MemoryStore, PresentationStore};

/// A valid draft with `slides` numbered slides.
pub fn draft(title: &str, slides: usize, duration: u32) -> PresentationDraft {
    PresentationDraft::new(title, (1..=slides).map(|i| format!("Slide {i}")).collect())
        .with_duration(duration)
}

pub fn presentation(slides: usize, duration: u32) -> Arc<Presentation> {
    Arc::new(Presentation::new("test-deck", draft("Test deck", slides, duration)).unwrap())
}

/// An empty store with one presentation, returning the store and its id.
pub fn store_with(slides: usize, duration: u32) -> (MemoryStore, String) {
    let store = MemoryStore::new();
    let created = store.create(draft("Stored deck", slides, duration)).unwrap();
    (store, created.id().to_string())
}

/// A running API server on a free port, on its own thread and runtime.
pub struct TestServer {
    pub base_url: String,
    handle: ApiHandle,
    thread: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    pub fn start(store: MemoryStore) -> Self {
        let (ready_tx, ready_rx) = mpsc::channel();
        let thread = thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("runtime");
            runtime.block_on(async move {
                let mut server = ApiServer::new(Arc::new(store));
                let addr = server.bind("127.0.0.1:0").await.expect("bind");
                ready_tx.send((addr, server.handle())).expect("ready");
                server.run().await.expect("serve");
            });
        });
        let (addr, handle) = ready_rx.recv().expect("server start");
        Self {
            base_url: format!("http://{addr}"),
            handle,
            thread: Some(thread),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
