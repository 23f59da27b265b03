use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::draft::{PresentationDraft, ValidationError};

/// Seconds each slide stays on screen. Only a fixed set of values is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SlideDuration(u32);

impl SlideDuration {
    pub const ALLOWED: [u32; 6] = [20, 25, 30, 35, 40, 45];
    pub const DEFAULT_SECONDS: u32 = 30;

    pub fn new(seconds: u32) -> Result<Self, ValidationError> {
        if Self::ALLOWED.contains(&seconds) {
            Ok(Self(seconds))
        } else {
            Err(ValidationError::InvalidDuration { seconds })
        }
    }

    pub fn seconds(self) -> u32 {
        self.0
    }
}

impl Default for SlideDuration {
    fn default() -> Self {
        Self(Self::DEFAULT_SECONDS)
    }
}

impl TryFrom<u32> for SlideDuration {
    type Error = ValidationError;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        Self::new(seconds)
    }
}

impl From<SlideDuration> for u32 {
    fn from(duration: SlideDuration) -> Self {
        duration.0
    }
}

/// Display-size hint for slide text. Has no effect on timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

impl FontSize {
    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::Xlarge => "xlarge",
        }
    }
}

impl FromStr for FontSize {
    type Err = String;

    /// Accepts the same lowercase names the JSON documents use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            "xlarge" => Ok(FontSize::Xlarge),
            _ => Err(format!(
                "unknown font size '{s}' (expected small, medium, large or xlarge)"
            )),
        }
    }
}

/// A validated presentation document.
///
/// Fields are private so that the deck can never become empty once built;
/// deserialisation goes through the same validation as [`Presentation::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PresentationRecord")]
pub struct Presentation {
    id: String,
    title: String,
    slides: Vec<String>,
    slide_duration: SlideDuration,
    font_size: FontSize,
}

/// Wire shape of a stored presentation before validation.
#[derive(Deserialize)]
struct PresentationRecord {
    id: String,
    #[serde(flatten)]
    draft: PresentationDraft,
}

impl TryFrom<PresentationRecord> for Presentation {
    type Error = ValidationError;

    fn try_from(record: PresentationRecord) -> Result<Self, Self::Error> {
        Presentation::new(record.id, record.draft)
    }
}

impl Presentation {
    /// Validate `draft` and attach `id` to it.
    pub fn new(id: impl Into<String>, draft: PresentationDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        let slide_duration = SlideDuration::new(draft.slide_duration)?;
        Ok(Self {
            id: id.into(),
            title: draft.title,
            slides: draft.slides,
            slide_duration,
            font_size: draft.font_size,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    /// Number of slides; never zero.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, index: usize) -> Option<&str> {
        self.slides.get(index).map(String::as_str)
    }

    pub fn slide_duration(&self) -> SlideDuration {
        self.slide_duration
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Running time of the whole deck at the configured slide duration.
    pub fn total_seconds(&self) -> u64 {
        self.slides.len() as u64 * u64::from(self.slide_duration.seconds())
    }

    /// Running time rounded up to whole minutes.
    pub fn total_minutes(&self) -> u64 {
        self.total_seconds().div_ceil(60)
    }

    /// Back to an editable draft, e.g. for an update round-trip.
    pub fn to_draft(&self) -> PresentationDraft {
        PresentationDraft {
            title: self.title.clone(),
            slides: self.slides.clone(),
            slide_duration: self.slide_duration.seconds(),
            font_size: self.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(slides: usize, duration: u32) -> PresentationDraft {
        PresentationDraft {
            title: "Deck".to_string(),
            slides: (0..slides).map(|i| format!("slide {i}")).collect(),
            slide_duration: duration,
            font_size: FontSize::default(),
        }
    }

    #[test]
    fn font_size_parses_wire_names() {
        for size in [FontSize::Small, FontSize::Medium, FontSize::Large, FontSize::Xlarge] {
            assert_eq!(size.label().parse::<FontSize>(), Ok(size));
        }
        assert_eq!("XLarge".parse::<FontSize>(), Ok(FontSize::Xlarge));
        assert!("huge".parse::<FontSize>().is_err());
    }

    #[test]
    fn duration_accepts_only_allowed_values() {
        for seconds in SlideDuration::ALLOWED {
            assert_eq!(SlideDuration::new(seconds).unwrap().seconds(), seconds);
        }
        assert!(matches!(
            SlideDuration::new(31),
            Err(ValidationError::InvalidDuration { seconds: 31 })
        ));
        assert!(SlideDuration::new(0).is_err());
    }

    #[test]
    fn duration_defaults_to_thirty() {
        assert_eq!(SlideDuration::default().seconds(), 30);
    }

    #[test]
    fn total_time_uses_configured_duration() {
        let p = Presentation::new("a", draft(20, 20)).unwrap();
        assert_eq!(p.total_seconds(), 400);
        assert_eq!(p.total_minutes(), 7);

        let p = Presentation::new("b", draft(2, 45)).unwrap();
        assert_eq!(p.total_seconds(), 90);
        assert_eq!(p.total_minutes(), 2);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let p = Presentation::new("id-1", draft(1, 25)).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], "id-1");
        assert_eq!(json["slideDuration"], 25);
        assert_eq!(json["fontSize"], "medium");
        assert_eq!(json["slides"][0], "slide 0");
    }

    #[test]
    fn deserialization_rejects_empty_deck() {
        let json = r#"{"id":"x","title":"T","slides":[],"slideDuration":30,"fontSize":"small"}"#;
        assert!(serde_json::from_str::<Presentation>(json).is_err());
    }

    #[test]
    fn deserialization_applies_defaults() {
        let json = r#"{"id":"x","title":"T","slides":["one"]}"#;
        let p: Presentation = serde_json::from_str(json).unwrap();
        assert_eq!(p.slide_duration().seconds(), 30);
        assert_eq!(p.font_size(), FontSize::Medium);
    }
}
