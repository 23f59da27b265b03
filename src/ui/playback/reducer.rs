//! Playback state machine.
//!
//! ```text
//!            toggle              toggle
//!   Ready ───────────→ Running ←────────→ Paused
//!     ↑                   │ tick / advance on last slide
//!     │ reset (any)       ↓
//!     └──────────────  Finished ── toggle ──→ Running (slide 0, full time)
//! ```

use crate::ui::mvi::Reducer;

use super::intent::PlaybackIntent;
use super::state::{PlaybackSession, PlaybackState, PlaybackStatus};

/// Reducer for the playback engine.
///
/// Every transition is total: commands that make no sense in the current
/// status leave the state unchanged, and nothing but `Load` has any effect
/// while no presentation is loaded.
pub struct PlaybackReducer;

impl Reducer for PlaybackReducer {
    type State = PlaybackState;
    type Intent = PlaybackIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, PlaybackIntent::Load { presentation }) => {
                PlaybackState::Loaded(PlaybackSession::new(presentation))
            }
            (_, PlaybackIntent::Unload) => PlaybackState::NoPresentation,
            (PlaybackState::NoPresentation, _) => PlaybackState::NoPresentation,
            (PlaybackState::Loaded(session), PlaybackIntent::Toggle) => {
                PlaybackState::Loaded(toggle(session))
            }
            (PlaybackState::Loaded(session), PlaybackIntent::Tick) => {
                PlaybackState::Loaded(tick(session))
            }
            (PlaybackState::Loaded(session), PlaybackIntent::Advance) => {
                PlaybackState::Loaded(advance(session))
            }
            (PlaybackState::Loaded(session), PlaybackIntent::Reset) => {
                PlaybackState::Loaded(reset(session))
            }
        }
    }
}

fn toggle(session: PlaybackSession) -> PlaybackSession {
    match session.status {
        PlaybackStatus::Finished => PlaybackSession {
            status: PlaybackStatus::Running,
            ..reset(session)
        },
        PlaybackStatus::Ready | PlaybackStatus::Paused => PlaybackSession {
            status: PlaybackStatus::Running,
            ..session
        },
        PlaybackStatus::Running => PlaybackSession {
            status: PlaybackStatus::Paused,
            ..session
        },
    }
}

/// Each slide gets exactly `slide_duration` ticks: the tick that would show
/// zero moves on instead.
fn tick(session: PlaybackSession) -> PlaybackSession {
    if session.status != PlaybackStatus::Running {
        return session;
    }
    if session.time_left > 1 {
        PlaybackSession {
            time_left: session.time_left - 1,
            ..session
        }
    } else {
        advance(session)
    }
}

fn advance(session: PlaybackSession) -> PlaybackSession {
    if session.status == PlaybackStatus::Finished {
        return session;
    }
    if session.is_last_slide() {
        return PlaybackSession {
            time_left: 0,
            status: PlaybackStatus::Finished,
            ..session
        };
    }
    // Ready always means slide 0 at full time, so leaving slide 0 by hand
    // pauses instead.
    let status = match session.status {
        PlaybackStatus::Ready => PlaybackStatus::Paused,
        other => other,
    };
    PlaybackSession {
        current_index: session.current_index + 1,
        time_left: session.slide_duration(),
        status,
        ..session
    }
}

fn reset(session: PlaybackSession) -> PlaybackSession {
    PlaybackSession {
        current_index: 0,
        time_left: session.slide_duration(),
        status: PlaybackStatus::Ready,
        ..session
    }
}
