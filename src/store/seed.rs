use crate::model::PresentationDraft;

const SAMPLE_TITLE: &str = "What is Pecha Kucha? - Sample deck";

const SAMPLE_SLIDES: &[&str] = &[
    "Pecha Kucha is a presentation format born in Tokyo in 2003. The name imitates the sound of conversation: chit-chat. Its promise is simple: say what matters, then sit down.",
    "The classic rule is twenty slides, twenty seconds each. Six minutes and forty seconds in total. The slides advance on their own, and the speaker has to keep up.",
    "Automatic advancement changes how you prepare. You cannot linger on a favourite point or skip ahead when you run late. Every slide gets the same share of attention.",
    "Write one idea per slide. If an idea needs two slides, it is really two ideas. If it needs half a slide, merge it with its neighbour.",
    "Rehearse with the timer running. The first run is always too long. Cut words, not slides, until each text fits comfortably inside its window.",
    "When the timer turns red, you have five seconds left. Use them to land the sentence, not to start a new one.",
    "Pause is for rehearsal, not for the stage. Space bar toggles the timer, R starts over, Escape leaves the deck.",
    "Finish on a line people can repeat. The last slide ends the talk; nothing wraps back to the beginning.",
];

/// The sample deck bundled with in-memory stores.
pub fn sample_presentation() -> PresentationDraft {
    PresentationDraft::new(
        SAMPLE_TITLE,
        SAMPLE_SLIDES.iter().map(|s| s.to_string()).collect(),
    )
    .with_duration(20)
}
