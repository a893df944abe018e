//! The five read-only collections served by the OctoFit REST API.

mod endpoint;
mod items;

pub use endpoint::ResourceEndpointConfig;
pub use items::{
    Activity, FieldValue, LeaderboardEntry, ResourceItem, ResourceState, Team, User, Workout,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One fetchable collection.
///
/// Declaration order is the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Users,
    Activities,
    Teams,
    Leaderboard,
    Workouts,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Users,
        ResourceKind::Activities,
        ResourceKind::Teams,
        ResourceKind::Leaderboard,
        ResourceKind::Workouts,
    ];

    /// Path segment under `/api/`.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Activities => "activities",
            ResourceKind::Teams => "teams",
            ResourceKind::Leaderboard => "leaderboard",
            ResourceKind::Workouts => "workouts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Users => "Users",
            ResourceKind::Activities => "Activities",
            ResourceKind::Teams => "Teams",
            ResourceKind::Leaderboard => "Leaderboard",
            ResourceKind::Workouts => "Workouts",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ResourceKind::Users => "👤",
            ResourceKind::Activities => "📊",
            ResourceKind::Teams => "👥",
            ResourceKind::Leaderboard => "🏆",
            ResourceKind::Workouts => "💪",
        }
    }

    pub fn endpoint(self) -> ResourceEndpointConfig {
        ResourceEndpointConfig::new(self.name())
    }

    /// Position in [`ResourceKind::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|kind| *kind == self).unwrap_or(0)
    }

    /// 1-based lookup used by the number hotkeys.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_around() {
        assert_eq!(ResourceKind::Workouts.next(), ResourceKind::Users);
        assert_eq!(ResourceKind::Users.previous(), ResourceKind::Workouts);
        assert_eq!(ResourceKind::Teams.next(), ResourceKind::Leaderboard);
    }

    #[test]
    fn number_hotkeys_are_one_based() {
        assert_eq!(ResourceKind::from_number(1), Some(ResourceKind::Users));
        assert_eq!(ResourceKind::from_number(5), Some(ResourceKind::Workouts));
        assert_eq!(ResourceKind::from_number(0), None);
        assert_eq!(ResourceKind::from_number(6), None);
    }

    #[test]
    fn endpoint_path_uses_resource_name() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.endpoint().path, format!("/api/{}/", kind.name()));
        }
    }
}
