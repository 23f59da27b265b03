//! One-second tick source for a running presentation.
//!
//! A `Ticker` lives exactly as long as one `Running` stretch: the app stops it
//! on every status change and starts a new one with a fresh generation, so a
//! tick already in the channel from the old one can be recognised and dropped.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::ui::events::AppEvent;

pub struct Ticker {
    generation: u64,
    stop_tx: Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    pub fn start(generation: u64, interval: Duration, events: Sender<AppEvent>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let thread = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if events.send(AppEvent::Tick { generation }).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        tracing::debug!(generation, ?interval, "Ticker started");
        Self {
            generation,
            stop_tx,
            thread: Some(thread),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop and wait for the thread; no tick is sent after this returns.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
            tracing::debug!(generation = self.generation, "Ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
