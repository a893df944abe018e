//! Pure mapping from fetch results to render-ready view models.
//!
//! Nothing here touches the network or the terminal; the UI only reads the
//! [`ViewModel`] it is handed.

mod activities;
mod dates;
mod leaderboard;
mod teams;
mod users;
mod workouts;

pub use activities::project_activities;
pub use dates::{format_date, DateStyle, INVALID_DATE};
pub use leaderboard::{project_leaderboard, RankTier};
pub use teams::{project_teams, team_detail, TeamDetail};
pub use users::{avatar_initial, project_users};
pub use workouts::{project_workouts, DifficultyTier};

use crate::fetch::FetchResult;
use crate::resource::{ResourceKind, ResourceState};

/// Sentinel shown wherever a record has no team.
pub const NO_TEAM: &str = "No Team";

/// Visual emphasis of a piece of text; the UI maps it to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Strong,
    Muted,
    Accent,
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Count badge, e.g. "5 Members".
    pub summary: Option<String>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    Loading { message: String },
    Failed { title: String, message: String },
    Empty { heading: &'static str, detail: &'static str },
    Table(TableView),
    Cards(Vec<Card>),
}

/// Projects whichever collection is currently loaded.
pub fn project(state: &ResourceState, style: &DateStyle) -> ViewModel {
    match state {
        ResourceState::Activities(result) => project_activities(result, style),
        ResourceState::Leaderboard(result) => project_leaderboard(result),
        ResourceState::Teams(result) => project_teams(result, style),
        ResourceState::Users(result) => project_users(result, style),
        ResourceState::Workouts(result) => project_workouts(result),
    }
}

/// Loading, error and empty states shared by every collection; `present`
/// only ever sees a non-empty item list.
fn frame<T>(
    kind: ResourceKind,
    result: &FetchResult<T>,
    present: impl FnOnce(&[T]) -> ViewModel,
) -> ViewModel {
    match result {
        FetchResult::Loading => ViewModel::Loading {
            message: format!("Loading {}...", kind.name()),
        },
        FetchResult::Failed { message, .. } => ViewModel::Failed {
            title: format!("Error Loading {}", kind.title()),
            message: message.clone(),
        },
        FetchResult::Succeeded { items } if items.is_empty() => {
            let (heading, detail) = empty_notice(kind);
            ViewModel::Empty { heading, detail }
        }
        FetchResult::Succeeded { items } => present(items),
    }
}

fn empty_notice(kind: ResourceKind) -> (&'static str, &'static str) {
    match kind {
        ResourceKind::Activities => (
            "No activities found",
            "Start tracking your fitness journey today!",
        ),
        ResourceKind::Leaderboard => (
            "No leaderboard data available",
            "Complete activities to appear on the leaderboard!",
        ),
        ResourceKind::Teams => (
            "No teams found",
            "Create or join a team to compete together!",
        ),
        ResourceKind::Users => ("No users found", "Be the first to join OctoFit Tracker!"),
        ResourceKind::Workouts => (
            "No workouts available",
            "Check back soon for personalized workout suggestions!",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchErrorKind;

    #[test]
    fn loading_message_names_resource() {
        let model = project(&ResourceState::loading(ResourceKind::Teams), &DateStyle::default());
        assert_eq!(
            model,
            ViewModel::Loading {
                message: "Loading teams...".to_string()
            }
        );
    }

    #[test]
    fn failure_replaces_content_with_error_panel() {
        let state = ResourceState::Workouts(FetchResult::Failed {
            kind: FetchErrorKind::HttpStatus { status: 503 },
            message: "HTTP error! status: 503".to_string(),
        });
        assert_eq!(
            project(&state, &DateStyle::default()),
            ViewModel::Failed {
                title: "Error Loading Workouts".to_string(),
                message: "HTTP error! status: 503".to_string(),
            }
        );
    }

    #[test]
    fn every_resource_has_an_empty_notice() {
        for kind in ResourceKind::ALL {
            let (heading, detail) = empty_notice(kind);
            assert!(heading.starts_with("No "));
            assert!(!detail.is_empty());
        }
    }
}
