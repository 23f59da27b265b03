//! Presentation document model.
//!
//! A presentation is a titled, ordered deck of slide texts played back with a
//! single, presentation-wide slide duration. Drafts are the unvalidated
//! insert/update payload; [`Presentation`] is only ever built from a draft
//! that passed validation.

mod draft;
mod presentation;

pub use draft::{PresentationDraft, SlideEditError, ValidationError};
pub use presentation::{FontSize, Presentation, SlideDuration};
