//! Base trait for UI state in the MVI architecture.

/// Marker trait for screen state objects.
///
/// A state value carries everything the view needs to render and is
/// replaced wholesale by the reducer, never mutated in place from the
/// outside.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
