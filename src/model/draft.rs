use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::presentation::{FontSize, SlideDuration};

/// Reasons a draft is refused at the document-validation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("At least one slide is required")]
    EmptySlideDeck,

    #[error("Slide {} text cannot be empty", .index + 1)]
    EmptySlide { index: usize },

    #[error("Slide duration {seconds}s is not one of 20, 25, 30, 35, 40, 45")]
    InvalidDuration { seconds: u32 },
}

/// Editing operations that would break the deck invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideEditError {
    #[error("Cannot remove the last remaining slide")]
    LastSlide,

    #[error("Slide index {index} out of range (deck has {len} slides)")]
    OutOfRange { index: usize, len: usize },
}

/// Insert/update payload for a presentation. Not validated until
/// [`PresentationDraft::validate`] or [`super::Presentation::new`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDraft {
    pub title: String,
    pub slides: Vec<String>,
    #[serde(default = "default_slide_duration")]
    pub slide_duration: u32,
    #[serde(default)]
    pub font_size: FontSize,
}

fn default_slide_duration() -> u32 {
    SlideDuration::DEFAULT_SECONDS
}

impl Default for PresentationDraft {
    /// A fresh editor form: no title, one blank slide.
    fn default() -> Self {
        Self {
            title: String::new(),
            slides: vec![String::new()],
            slide_duration: default_slide_duration(),
            font_size: FontSize::default(),
        }
    }
}

impl PresentationDraft {
    pub fn new(title: impl Into<String>, slides: Vec<String>) -> Self {
        Self {
            title: title.into(),
            slides,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.slide_duration = seconds;
        self
    }

    pub fn with_font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = font_size;
        self
    }

    /// Check every document constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.slides.is_empty() {
            return Err(ValidationError::EmptySlideDeck);
        }
        if let Some(index) = self.slides.iter().position(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptySlide { index });
        }
        SlideDuration::new(self.slide_duration)?;
        Ok(())
    }

    /// Append a slide at the end of the deck.
    pub fn add_slide(&mut self, text: impl Into<String>) {
        self.slides.push(text.into());
    }

    /// Remove the slide at `index`. The last remaining slide cannot be removed.
    pub fn remove_slide(&mut self, index: usize) -> Result<String, SlideEditError> {
        let len = self.slides.len();
        if index >= len {
            return Err(SlideEditError::OutOfRange { index, len });
        }
        if len == 1 {
            return Err(SlideEditError::LastSlide);
        }
        Ok(self.slides.remove(index))
    }

    /// Move the slide at `from` so that it ends up at position `to`.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<(), SlideEditError> {
        let len = self.slides.len();
        for index in [from, to] {
            if index >= len {
                return Err(SlideEditError::OutOfRange { index, len });
            }
        }
        let slide = self.slides.remove(from);
        self.slides.insert(to, slide);
        Ok(())
    }

    /// Deck running time at the draft's own duration, in whole minutes
    /// rounded up.
    pub fn total_minutes(&self) -> u64 {
        (self.slides.len() as u64 * u64::from(self.slide_duration)).div_ceil(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PresentationDraft {
        PresentationDraft::new("Title", vec!["one".into(), "two".into()])
    }

    #[test]
    fn default_form_has_one_blank_slide() {
        let draft = PresentationDraft::default();
        assert_eq!(draft.slides, vec![String::new()]);
        assert_eq!(draft.slide_duration, 30);
        assert_eq!(draft.font_size, FontSize::Medium);
    }

    #[test]
    fn validate_accepts_well_formed_draft() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut draft = valid();
        draft.title = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn validate_rejects_empty_deck() {
        let mut draft = valid();
        draft.slides.clear();
        assert_eq!(draft.validate(), Err(ValidationError::EmptySlideDeck));
    }

    #[test]
    fn validate_reports_first_blank_slide() {
        let mut draft = valid();
        draft.slides.push(String::new());
        assert_eq!(draft.validate(), Err(ValidationError::EmptySlide { index: 2 }));
    }

    #[test]
    fn validate_rejects_unlisted_duration() {
        let draft = valid().with_duration(50);
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidDuration { seconds: 50 })
        );
    }

    #[test]
    fn remove_refuses_last_slide() {
        let mut draft = PresentationDraft::new("T", vec!["only".into()]);
        assert_eq!(draft.remove_slide(0), Err(SlideEditError::LastSlide));
        assert_eq!(draft.slides.len(), 1);
    }

    #[test]
    fn remove_and_move_keep_order() {
        let mut draft = valid();
        draft.add_slide("three");
        draft.move_slide(2, 0).unwrap();
        assert_eq!(draft.slides, vec!["three", "one", "two"]);
        assert_eq!(draft.remove_slide(1).unwrap(), "one");
        assert_eq!(draft.slides, vec!["three", "two"]);
        assert_eq!(
            draft.remove_slide(5),
            Err(SlideEditError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn total_minutes_follows_duration() {
        let mut draft = valid().with_duration(45);
        assert_eq!(draft.total_minutes(), 2);
        draft.slide_duration = 20;
        assert_eq!(draft.total_minutes(), 1);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let draft: PresentationDraft =
            serde_json::from_str(r#"{"title":"T","slides":["a"]}"#).unwrap();
        assert_eq!(draft.slide_duration, 30);
        assert_eq!(draft.font_size, FontSize::Medium);
    }
}
