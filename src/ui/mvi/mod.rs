//! Model-View-Intent (MVI) primitives shared by the viewer's state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └────── key press / tick ──────┘
//! ```
//!
//! - **State**: everything a screen needs to render, nothing else
//! - **Intent**: a user command or a timer event
//! - **Reducer**: the only place state changes, as a pure function

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
