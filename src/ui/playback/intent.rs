use std::sync::Arc;

use crate::model::Presentation;
use crate::ui::mvi::Intent;

/// Everything that can change a playback session.
#[derive(Debug, Clone)]
pub enum PlaybackIntent {
    /// Start a fresh session for a presentation fetched from the store.
    Load { presentation: Arc<Presentation> },

    /// Discard the session (viewer closed).
    Unload,

    /// Start/pause, or restart once finished.
    Toggle,

    /// One second elapsed while running.
    Tick,

    /// Move to the next slide, or finish on the last one.
    Advance,

    /// Back to slide 0 at full time, stopped.
    Reset,
}

impl Intent for PlaybackIntent {}
