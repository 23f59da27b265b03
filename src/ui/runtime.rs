use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use crate::store::PresentationStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Upper bound on how long the loop waits before redrawing anyway.
const REDRAW_INTERVAL: Duration = Duration::from_millis(250);

/// What the viewer opens with.
#[derive(Debug, Clone)]
pub enum StartScreen {
    Library,
    Presentation(String),
}

pub fn run(
    store: Arc<dyn PresentationStore>,
    start: StartScreen,
    tick_interval: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new();
    let mut app = App::new(store, tick_interval, events.sender());

    match start {
        StartScreen::Library => app.open_library(),
        StartScreen::Presentation(id) => app.open_presentation(&id),
    }

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(REDRAW_INTERVAL) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick { generation }) => app.on_tick(generation),
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    app.shutdown();
    drop(events);
    drop(guard);
    tracing::info!("Viewer closed");
    result
}
