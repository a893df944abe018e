use crate::resource::Team;
use crate::ui::mvi::UiState;

/// Popup showing one team that is already loaded; opening it never fetches.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TeamDetailState {
    #[default]
    Hidden,
    Visible { team: Team },
}

impl UiState for TeamDetailState {}

impl TeamDetailState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
