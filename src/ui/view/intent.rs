use crate::resource::{ResourceKind, ResourceState};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ViewIntent {
    /// A new lifecycle for `kind` began; `generation` identifies it.
    Activate { kind: ResourceKind, generation: u64 },
    /// A lifecycle reached its terminal state.
    Settled {
        generation: u64,
        resource: ResourceState,
    },
    MoveSelection { delta: isize },
}

impl Intent for ViewIntent {}
