use crate::resource::ResourceState;
use crate::ui::mvi::Reducer;
use crate::ui::view::intent::ViewIntent;
use crate::ui::view::state::ViewState;

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::Activate { kind, generation } => ViewState {
                generation,
                resource: ResourceState::loading(kind),
                selected: 0,
            },
            ViewIntent::Settled {
                generation,
                resource,
            } => {
                // Late results from a previous activation, a second terminal
                // value, or a mismatched collection are all dropped.
                if generation != state.generation
                    || !state.is_loading()
                    || !resource.is_terminal()
                    || resource.kind() != state.kind()
                {
                    return state;
                }
                ViewState {
                    generation,
                    resource,
                    selected: 0,
                }
            }
            ViewIntent::MoveSelection { delta } => {
                let count = state.resource.item_count();
                if count == 0 {
                    return ViewState {
                        selected: 0,
                        ..state
                    };
                }
                let current = state.selected.min(count - 1) as isize;
                let selected = (current + delta).rem_euclid(count as isize) as usize;
                ViewState { selected, ..state }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchErrorKind, FetchResult};
    use crate::resource::{ResourceKind, ResourceState, User};

    fn users(count: usize) -> ResourceState {
        ResourceState::Users(FetchResult::Succeeded {
            items: vec![User::default(); count],
        })
    }

    fn active(kind: ResourceKind, generation: u64) -> ViewState {
        ViewReducer::reduce(
            ViewState::default(),
            ViewIntent::Activate { kind, generation },
        )
    }

    #[test]
    fn activate_starts_loading() {
        let state = active(ResourceKind::Teams, 3);
        assert_eq!(state.generation, 3);
        assert_eq!(state.kind(), ResourceKind::Teams);
        assert!(state.is_loading());
    }

    #[test]
    fn settled_result_of_current_generation_is_applied() {
        let state = ViewReducer::reduce(
            active(ResourceKind::Users, 1),
            ViewIntent::Settled {
                generation: 1,
                resource: users(2),
            },
        );
        assert_eq!(state.resource, users(2));
    }

    #[test]
    fn stale_generation_is_ignored() {
        let state = ViewReducer::reduce(
            active(ResourceKind::Users, 2),
            ViewIntent::Settled {
                generation: 1,
                resource: users(2),
            },
        );
        assert!(state.is_loading());
    }

    #[test]
    fn terminal_state_is_not_overwritten() {
        let failed = ResourceState::Users(FetchResult::Failed {
            kind: FetchErrorKind::HttpStatus { status: 500 },
            message: "HTTP error! status: 500".to_string(),
        });
        let state = ViewReducer::reduce(
            active(ResourceKind::Users, 1),
            ViewIntent::Settled {
                generation: 1,
                resource: failed.clone(),
            },
        );
        let state = ViewReducer::reduce(
            state,
            ViewIntent::Settled {
                generation: 1,
                resource: users(1),
            },
        );
        assert_eq!(state.resource, failed);
    }

    #[test]
    fn selection_wraps_and_is_zero_without_items() {
        let state = ViewReducer::reduce(
            active(ResourceKind::Users, 1),
            ViewIntent::Settled {
                generation: 1,
                resource: users(3),
            },
        );
        let state = ViewReducer::reduce(state, ViewIntent::MoveSelection { delta: -1 });
        assert_eq!(state.selected, 2);
        let state = ViewReducer::reduce(state, ViewIntent::MoveSelection { delta: 1 });
        assert_eq!(state.selected, 0);

        let loading = ViewReducer::reduce(
            active(ResourceKind::Users, 2),
            ViewIntent::MoveSelection { delta: 1 },
        );
        assert_eq!(loading.selected, 0);
    }
}
