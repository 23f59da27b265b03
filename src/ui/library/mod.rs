//! Presentation picker shown before playback.

mod intent;
mod reducer;
mod state;

pub use intent::LibraryIntent;
pub use reducer::LibraryReducer;
pub use state::{LibraryEntry, LibraryState};
