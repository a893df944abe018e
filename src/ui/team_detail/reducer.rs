use crate::ui::mvi::Reducer;
use crate::ui::team_detail::intent::TeamDetailIntent;
use crate::ui::team_detail::state::TeamDetailState;

pub struct TeamDetailReducer;

impl Reducer for TeamDetailReducer {
    type State = TeamDetailState;
    type Intent = TeamDetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TeamDetailIntent::Open { team } => TeamDetailState::Visible { team },
            TeamDetailIntent::Close => TeamDetailState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Team;

    #[test]
    fn open_then_close() {
        let team = Team::default();
        let state = TeamDetailReducer::reduce(
            TeamDetailState::Hidden,
            TeamDetailIntent::Open { team: team.clone() },
        );
        assert_eq!(state, TeamDetailState::Visible { team });
        assert!(state.is_visible());

        let state = TeamDetailReducer::reduce(state, TeamDetailIntent::Close);
        assert!(!state.is_visible());
    }
}
