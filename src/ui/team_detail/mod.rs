mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_team_detail;
pub use intent::TeamDetailIntent;
pub use reducer::TeamDetailReducer;
pub use state::TeamDetailState;
