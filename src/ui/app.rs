use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::store::PresentationStore;
use crate::ui::events::AppEvent;
use crate::ui::input::PlaybackCommand;
use crate::ui::library::{LibraryIntent, LibraryReducer, LibraryState};
use crate::ui::mvi::Reducer;
use crate::ui::playback::{PlaybackIntent, PlaybackReducer, PlaybackState, PlaybackStatus};
use crate::ui::ticker::Ticker;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Library,
    Playback,
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    store: Arc<dyn PresentationStore>,
    /// Presentation list (MVI pattern).
    library: LibraryState,
    /// Playback engine state (MVI pattern).
    playback: PlaybackState,
    /// Tick source, present only while playback is running.
    ticker: Option<Ticker>,
    tick_generation: u64,
    tick_interval: Duration,
    events: Sender<AppEvent>,
    /// Exit from playback returns to the list instead of quitting.
    opened_from_library: bool,
    last_error: Option<String>,
}

impl App {
    pub fn new(
        store: Arc<dyn PresentationStore>,
        tick_interval: Duration,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Library,
            store,
            library: LibraryState::default(),
            playback: PlaybackState::default(),
            ticker: None,
            tick_generation: 0,
            tick_interval,
            events,
            opened_from_library: false,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn library(&self) -> &LibraryState {
        &self.library
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Generation of the live ticker, if playback is running.
    pub fn ticker_generation(&self) -> Option<u64> {
        self.ticker.as_ref().map(Ticker::generation)
    }

    // ========================================================================
    // Library
    // ========================================================================

    /// Fetch the list and show it.
    pub fn open_library(&mut self) {
        self.screen = Screen::Library;
        let intent = match self.store.list() {
            Ok(presentations) => {
                self.last_error = None;
                LibraryIntent::Load { presentations }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to list presentations");
                self.last_error = Some(err.to_string());
                LibraryIntent::LoadFailed {
                    message: err.to_string(),
                }
            }
        };
        dispatch_mvi!(self, library, LibraryReducer, intent);
    }

    pub fn move_selection_up(&mut self) {
        dispatch_mvi!(self, library, LibraryReducer, LibraryIntent::MoveUp);
    }

    pub fn move_selection_down(&mut self) {
        dispatch_mvi!(self, library, LibraryReducer, LibraryIntent::MoveDown);
    }

    pub fn open_selected(&mut self) {
        let Some(id) = self.library.selected().map(|entry| entry.id.clone()) else {
            return;
        };
        self.open_presentation(&id);
        self.opened_from_library = true;
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Load one presentation into the engine. The store is hit exactly once;
    /// a missing id or an unreachable store leaves the engine empty, which
    /// renders as "not found".
    pub fn open_presentation(&mut self, id: &str) {
        self.screen = Screen::Playback;
        self.opened_from_library = false;
        let intent = match self.store.get(id) {
            Ok(Some(presentation)) => {
                self.last_error = None;
                tracing::info!(id, title = presentation.title(), "Presentation opened");
                PlaybackIntent::Load {
                    presentation: Arc::new(presentation),
                }
            }
            Ok(None) => {
                tracing::info!(id, "Presentation not found");
                self.last_error = None;
                PlaybackIntent::Unload
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Failed to load presentation");
                self.last_error = Some(err.to_string());
                PlaybackIntent::Unload
            }
        };
        self.dispatch_playback(intent);
    }

    pub fn on_command(&mut self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::Toggle => self.dispatch_playback(PlaybackIntent::Toggle),
            PlaybackCommand::Reset => self.dispatch_playback(PlaybackIntent::Reset),
            PlaybackCommand::Exit => self.close_presentation(),
        }
    }

    /// Skip to the next slide, or finish on the last one.
    ///
    /// Engine hook for embedders and tests. The keyboard surface maps only
    /// Space, `r`/`R` and Esc, so no key reaches this. A running ticker is
    /// kept because advancing never changes a `Running` status.
    pub fn advance(&mut self) {
        self.dispatch_playback(PlaybackIntent::Advance);
    }

    /// Apply a tick unless it came from a ticker that has since been stopped.
    pub fn on_tick(&mut self, generation: u64) {
        if self.ticker_generation() != Some(generation) {
            tracing::trace!(generation, "Dropping stale tick");
            return;
        }
        self.dispatch_playback(PlaybackIntent::Tick);
    }

    /// Tear the session down and leave the viewer.
    pub fn close_presentation(&mut self) {
        self.dispatch_playback(PlaybackIntent::Unload);
        if self.opened_from_library {
            self.open_library();
        } else {
            self.request_quit();
        }
    }

    /// Dispatch an intent to the playback reducer and keep the ticker in step
    /// with the resulting status.
    pub fn dispatch_playback(&mut self, intent: PlaybackIntent) {
        let before = self.playback.status();
        dispatch_mvi!(self, playback, PlaybackReducer, intent);
        let after = self.playback.status();
        if before != after {
            self.sync_ticker(after);
        }
    }

    fn sync_ticker(&mut self, status: Option<PlaybackStatus>) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        if status == Some(PlaybackStatus::Running) {
            self.tick_generation += 1;
            self.ticker = Some(Ticker::start(
                self.tick_generation,
                self.tick_interval,
                self.events.clone(),
            ));
        }
    }

    /// Stop background work before the terminal is restored.
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PresentationDraft;
    use crate::store::MemoryStore;
    use std::sync::mpsc;

    fn app_with_deck() -> (App, String, mpsc::Receiver<AppEvent>) {
        let store = MemoryStore::new();
        let created = store
            .create(PresentationDraft::new("Deck", vec!["one".into(), "two".into()]))
            .unwrap();
        let (tx, rx) = mpsc::channel();
        let app = App::new(Arc::new(store), Duration::from_secs(60), tx);
        (app, created.id().to_string(), rx)
    }

    #[test]
    fn ticker_follows_running_status() {
        let (mut app, id, _rx) = app_with_deck();
        app.open_presentation(&id);
        assert_eq!(app.ticker_generation(), None);

        app.on_command(PlaybackCommand::Toggle);
        assert_eq!(app.ticker_generation(), Some(1));

        app.on_command(PlaybackCommand::Toggle);
        assert_eq!(app.ticker_generation(), None);

        app.on_command(PlaybackCommand::Toggle);
        assert_eq!(app.ticker_generation(), Some(2));
    }

    #[test]
    fn stale_tick_is_ignored() {
        let (mut app, id, _rx) = app_with_deck();
        app.open_presentation(&id);
        app.on_command(PlaybackCommand::Toggle);
        app.on_command(PlaybackCommand::Toggle);
        app.on_command(PlaybackCommand::Toggle);

        app.on_tick(1);
        assert_eq!(app.playback().session().unwrap().time_left(), 30);
        app.on_tick(2);
        assert_eq!(app.playback().session().unwrap().time_left(), 29);
    }

    #[test]
    fn advance_keeps_running_ticker_until_finished() {
        let (mut app, id, _rx) = app_with_deck();
        app.open_presentation(&id);
        app.on_command(PlaybackCommand::Toggle);
        assert_eq!(app.ticker_generation(), Some(1));

        app.advance();
        assert_eq!(app.ticker_generation(), Some(1));
        assert_eq!(app.playback().session().unwrap().current_index(), 1);

        app.advance();
        assert_eq!(app.ticker_generation(), None);
        assert_eq!(app.playback().status(), Some(PlaybackStatus::Finished));
    }
}
