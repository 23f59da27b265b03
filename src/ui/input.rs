use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::ui::app::{App, Screen};

/// Viewer commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Toggle,
    Reset,
    Exit,
}

/// Space toggles, `r`/`R` resets, Escape exits. Everything else is ignored.
pub fn map_playback_key(key: KeyEvent) -> Option<PlaybackCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(PlaybackCommand::Toggle),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlaybackCommand::Reset),
        KeyCode::Esc => Some(PlaybackCommand::Exit),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.screen() {
        Screen::Playback => {
            if let Some(command) = map_playback_key(key) {
                app.on_command(command);
            }
        }
        Screen::Library => match key.code {
            KeyCode::Up => app.move_selection_up(),
            KeyCode::Down => app.move_selection_down(),
            KeyCode::Enter => app.open_selected(),
            KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
    }
}
