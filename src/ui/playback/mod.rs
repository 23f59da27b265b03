//! Playback engine.
//!
//! Drives one timed delivery of a presentation: current slide, countdown,
//! and Ready → Running ⇄ Paused → Finished status. Pure MVI:
//! - `state.rs` - session state and derived values (urgency, progress)
//! - `intent.rs` - user commands and the one-second tick
//! - `reducer.rs` - the transitions
//!
//! The engine never schedules anything itself; the surface owns the tick
//! source and keeps it alive only while the status is `Running`.

mod intent;
mod reducer;
mod state;

pub use intent::PlaybackIntent;
pub use reducer::PlaybackReducer;
pub use state::{
    PlaybackSession, PlaybackState, PlaybackStatus, PlaybackView, URGENT_THRESHOLD_SECS,
};
