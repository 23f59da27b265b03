/// Marker trait for reducer-owned state.
///
/// `Default` is the state a screen starts in and is what
/// `std::mem::take` leaves behind while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
