//! Playback session state and everything derived from it.

use std::sync::Arc;

use crate::model::{FontSize, Presentation};
use crate::ui::mvi::UiState;

/// Countdown status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// First slide shown at full time, not counting down.
    Ready,
    /// Counting down; the only status in which ticks are delivered.
    Running,
    /// Frozen mid-slide, resumable.
    Paused,
    /// Past the end of the last slide. Left only by toggle (restart) or reset.
    Finished,
}

/// Seconds left at or below which a running countdown is urgent.
pub const URGENT_THRESHOLD_SECS: u32 = 5;

/// One delivery of one presentation.
///
/// `current_index` and `time_left` only ever change together inside the
/// reducer, so readers never see a half-applied transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub(super) presentation: Arc<Presentation>,
    pub(super) current_index: usize,
    pub(super) time_left: u32,
    pub(super) status: PlaybackStatus,
}

impl PlaybackSession {
    /// A fresh session: slide 0, full duration, `Ready`.
    pub fn new(presentation: Arc<Presentation>) -> Self {
        let time_left = presentation.slide_duration().seconds();
        Self {
            presentation,
            current_index: 0,
            time_left,
            status: PlaybackStatus::Ready,
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn slide_count(&self) -> usize {
        self.presentation.slide_count()
    }

    pub fn slide_duration(&self) -> u32 {
        self.presentation.slide_duration().seconds()
    }

    pub fn is_last_slide(&self) -> bool {
        self.current_index + 1 >= self.slide_count()
    }

    pub fn current_slide(&self) -> &str {
        self.presentation.slide(self.current_index).unwrap_or_default()
    }

    /// Running with at most five seconds left on the current slide.
    pub fn is_urgent(&self) -> bool {
        self.status == PlaybackStatus::Running && self.time_left <= URGENT_THRESHOLD_SECS
    }

    /// Remaining share of the current slide, from 1.0 down to 0.0.
    pub fn progress(&self) -> f64 {
        f64::from(self.time_left) / f64::from(self.slide_duration())
    }

    /// Stopped on the first slide with its full time: freshly loaded, reset,
    /// or paused before the first tick landed.
    pub fn is_at_start(&self) -> bool {
        match self.status {
            PlaybackStatus::Ready => true,
            PlaybackStatus::Paused => {
                self.current_index == 0 && self.time_left == self.slide_duration()
            }
            PlaybackStatus::Running | PlaybackStatus::Finished => false,
        }
    }

    /// Label of the start/pause control for the current status.
    pub fn action_label(&self) -> &'static str {
        match self.status {
            PlaybackStatus::Finished => "RESTART",
            PlaybackStatus::Running => "PAUSE",
            PlaybackStatus::Ready | PlaybackStatus::Paused => "START",
        }
    }

    pub fn view(&self) -> PlaybackView<'_> {
        PlaybackView {
            title: self.presentation.title(),
            status: self.status,
            slide_number: self.current_index + 1,
            slide_count: self.slide_count(),
            time_left: self.time_left,
            progress: self.progress(),
            urgent: self.is_urgent(),
            ready_prompt: self.is_at_start(),
            slide_text: self.current_slide(),
            font_size: self.presentation.font_size(),
            action_label: self.action_label(),
        }
    }
}

/// Engine state: either nothing is loaded or one session is in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaybackState {
    /// The store had no such presentation, or nothing was opened yet.
    #[default]
    NoPresentation,
    Loaded(PlaybackSession),
}

impl UiState for PlaybackState {}

impl PlaybackState {
    pub fn session(&self) -> Option<&PlaybackSession> {
        match self {
            PlaybackState::Loaded(session) => Some(session),
            PlaybackState::NoPresentation => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PlaybackState::Loaded(_))
    }

    pub fn status(&self) -> Option<PlaybackStatus> {
        self.session().map(PlaybackSession::status)
    }

    pub fn is_running(&self) -> bool {
        self.status() == Some(PlaybackStatus::Running)
    }

    pub fn is_urgent(&self) -> bool {
        self.session().is_some_and(PlaybackSession::is_urgent)
    }

    /// Snapshot for rendering. `None` is the neutral "not found" view.
    pub fn view(&self) -> Option<PlaybackView<'_>> {
        self.session().map(PlaybackSession::view)
    }
}

/// Everything the surface reads to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackView<'a> {
    pub title: &'a str,
    pub status: PlaybackStatus,
    /// 1-based.
    pub slide_number: usize,
    pub slide_count: usize,
    pub time_left: u32,
    pub progress: f64,
    pub urgent: bool,
    /// Show the "Ready?" screen instead of the slide.
    pub ready_prompt: bool,
    pub slide_text: &'a str,
    pub font_size: FontSize,
    pub action_label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PresentationDraft;

    fn session(slides: usize, duration: u32) -> PlaybackSession {
        let draft = PresentationDraft::new(
            "Deck",
            (0..slides).map(|i| format!("slide {i}")).collect(),
        )
        .with_duration(duration);
        PlaybackSession::new(Arc::new(Presentation::new("id", draft).unwrap()))
    }

    #[test]
    fn new_session_is_ready_at_full_time() {
        let s = session(3, 25);
        assert_eq!(s.status(), PlaybackStatus::Ready);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.time_left(), 25);
        assert_eq!(s.current_slide(), "slide 0");
        assert!((s.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn urgency_requires_running() {
        let mut s = session(2, 20);
        s.time_left = 3;
        for status in [
            PlaybackStatus::Ready,
            PlaybackStatus::Paused,
            PlaybackStatus::Finished,
        ] {
            s.status = status;
            assert!(!s.is_urgent(), "{status:?} must never be urgent");
        }
        s.status = PlaybackStatus::Running;
        assert!(s.is_urgent());
        s.time_left = 6;
        assert!(!s.is_urgent());
        s.time_left = 5;
        assert!(s.is_urgent());
    }

    #[test]
    fn progress_shrinks_with_time() {
        let mut s = session(1, 40);
        s.time_left = 10;
        assert!((s.progress() - 0.25).abs() < f64::EPSILON);
        s.time_left = 0;
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn action_label_follows_status() {
        let mut s = session(1, 30);
        assert_eq!(s.action_label(), "START");
        s.status = PlaybackStatus::Running;
        assert_eq!(s.action_label(), "PAUSE");
        s.status = PlaybackStatus::Paused;
        assert_eq!(s.action_label(), "START");
        s.status = PlaybackStatus::Finished;
        assert_eq!(s.action_label(), "RESTART");
    }

    #[test]
    fn ready_prompt_covers_pause_before_first_tick() {
        let mut s = session(3, 20);
        assert!(s.view().ready_prompt);

        s.status = PlaybackStatus::Running;
        assert!(!s.view().ready_prompt);

        s.status = PlaybackStatus::Paused;
        assert!(s.view().ready_prompt);

        s.time_left = 19;
        assert!(!s.view().ready_prompt);

        s.time_left = 20;
        s.current_index = 1;
        assert!(!s.view().ready_prompt);

        s.status = PlaybackStatus::Finished;
        assert!(!s.view().ready_prompt);
    }

    #[test]
    fn empty_state_has_neutral_view() {
        let state = PlaybackState::default();
        assert!(state.view().is_none());
        assert!(!state.is_running());
        assert!(!state.is_urgent());
        assert_eq!(state.status(), None);
    }

    #[test]
    fn view_counts_slides_from_one() {
        let mut s = session(4, 30);
        s.current_index = 2;
        let view = s.view();
        assert_eq!(view.slide_number, 3);
        assert_eq!(view.slide_count, 4);
        assert_eq!(view.slide_text, "slide 2");
        assert_eq!(view.font_size, FontSize::Medium);
    }
}
