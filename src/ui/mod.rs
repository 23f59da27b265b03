//! Terminal viewer: presentation list and timed playback.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod library;
pub mod mvi;
pub mod playback;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod ticker;

pub use runtime::{run, StartScreen};
