use crate::ui::library::intent::LibraryIntent;
use crate::ui::library::state::{LibraryEntry, LibraryState};
use crate::ui::mvi::Reducer;

pub struct LibraryReducer;

impl Reducer for LibraryReducer {
    type State = LibraryState;
    type Intent = LibraryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LibraryIntent::Load { presentations } => {
                let previous = state.selected().map(|entry| entry.id.clone());
                let entries: Vec<LibraryEntry> =
                    presentations.iter().map(LibraryEntry::from).collect();
                let selected = previous
                    .and_then(|id| entries.iter().position(|entry| entry.id == id))
                    .unwrap_or(0);
                LibraryState::Listed { entries, selected }
            }
            LibraryIntent::LoadFailed { message } => LibraryState::Failed { message },
            LibraryIntent::MoveUp => match state {
                LibraryState::Listed { entries, selected } if !entries.is_empty() => {
                    let selected = if selected == 0 {
                        entries.len() - 1
                    } else {
                        selected - 1
                    };
                    LibraryState::Listed { entries, selected }
                }
                other => other,
            },
            LibraryIntent::MoveDown => match state {
                LibraryState::Listed { entries, selected } if !entries.is_empty() => {
                    let selected = if selected + 1 >= entries.len() {
                        0
                    } else {
                        selected + 1
                    };
                    LibraryState::Listed { entries, selected }
                }
                other => other,
            },
        }
    }
}
