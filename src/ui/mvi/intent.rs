/// Marker trait for intent objects.
///
/// An intent is either a user action (typing, a header click, a page
/// change) or a system event (the fetch finished).
pub trait Intent: Send + 'static {}
