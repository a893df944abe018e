use crate::resource::Team;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TeamDetailIntent {
    Open { team: Team },
    Close,
}

impl Intent for TeamDetailIntent {}
