//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents cover user actions (keystrokes, submit), system events
/// (service responses), and navigation. They are consumed by reducers
/// to produce new states.
pub trait Intent: Send + 'static {}
