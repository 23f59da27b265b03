/// Marker trait for intents.
///
/// An intent is either a user command (toggle, reset, list navigation) or a
/// system event such as a countdown tick. Intents never carry behaviour; the
/// reducer decides what they mean for the current state.
pub trait Intent: Send + 'static {}
