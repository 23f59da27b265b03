use crate::model::Presentation;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LibraryIntent {
    /// Replace the listing, keeping the selection on the same id if it survived.
    Load { presentations: Vec<Presentation> },
    LoadFailed { message: String },
    MoveUp,
    MoveDown,
}

impl Intent for LibraryIntent {}
