/// Marker trait for UI state objects.
///
/// States own everything the view needs, are replaced rather than mutated
/// in place, and compare with `PartialEq` so tests can assert transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
