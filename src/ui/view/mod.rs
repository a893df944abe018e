mod intent;
mod reducer;
mod state;

pub use intent::ViewIntent;
pub use reducer::ViewReducer;
pub use state::ViewState;
