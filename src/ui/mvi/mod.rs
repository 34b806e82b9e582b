//! Model-View-Intent (MVI) primitives for the UI layer.
//!
//! Screens are modeled as a state type, an intent type, and a reducer
//! that is the only place transitions happen:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
