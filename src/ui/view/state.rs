use crate::resource::{ResourceKind, ResourceState};
use crate::ui::mvi::UiState;

/// The collection on screen and the lifecycle that feeds it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Generation of the active lifecycle; 0 before the first activation.
    pub generation: u64,
    pub resource: ResourceState,
    /// Highlighted row or card.
    pub selected: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            generation: 0,
            resource: ResourceState::loading(ResourceKind::Users),
            selected: 0,
        }
    }
}

impl UiState for ViewState {}

impl ViewState {
    pub fn kind(&self) -> ResourceKind {
        self.resource.kind()
    }

    pub fn is_loading(&self) -> bool {
        self.resource.is_loading()
    }
}
