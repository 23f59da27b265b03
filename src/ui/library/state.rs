use crate::model::Presentation;
use crate::ui::mvi::UiState;

/// One row of the library list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub id: String,
    pub title: String,
    pub slide_count: usize,
    pub slide_duration: u32,
    pub total_minutes: u64,
}

impl From<&Presentation> for LibraryEntry {
    fn from(presentation: &Presentation) -> Self {
        Self {
            id: presentation.id().to_string(),
            title: presentation.title().to_string(),
            slide_count: presentation.slide_count(),
            slide_duration: presentation.slide_duration().seconds(),
            total_minutes: presentation.total_minutes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LibraryState {
    /// Nothing fetched yet.
    #[default]
    Empty,
    Listed {
        entries: Vec<LibraryEntry>,
        selected: usize,
    },
    /// The store could not be reached.
    Failed { message: String },
}

impl UiState for LibraryState {}

impl LibraryState {
    pub fn entries(&self) -> &[LibraryEntry] {
        match self {
            LibraryState::Listed { entries, .. } => entries,
            LibraryState::Empty | LibraryState::Failed { .. } => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            LibraryState::Listed { entries, selected } if !entries.is_empty() => Some(*selected),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&LibraryEntry> {
        self.selected_index().and_then(|i| self.entries().get(i))
    }
}
