//! State / intent / reducer primitives shared by the UI slices.
//!
//! Every slice owns one state value that only its reducer replaces:
//!
//! ```text
//! key or fetch event ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
