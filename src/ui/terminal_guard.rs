use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Puts the terminal back into cooked mode exactly once: on drop, or from the
/// panic hook if the viewer panics first.
pub struct TerminalGuard {
    armed: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let armed = Arc::new(AtomicBool::new(true));
        let hook_armed = Arc::clone(&armed);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if disarm(&hook_armed) {
                restore_terminal();
            }
            previous(info);
        }));
        Self { armed }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if disarm(&self.armed) {
            restore_terminal();
        }
    }
}

/// True for the first caller only.
fn disarm(armed: &AtomicBool) -> bool {
    armed.swap(false, Ordering::SeqCst)
}

/// Best effort: the process may already be unwinding.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}

/// Raw mode + alternate screen. Keys no longer reach the shell until the
/// guard is dropped. A failure halfway through undoes what was already set.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    Ok((terminal, guard))
}
