use crate::fetch::FetchResult;
use crate::projection::{frame, Cell, TableView, Tone, ViewModel, NO_TEAM};
use crate::resource::{LeaderboardEntry, ResourceKind};

const HEADERS: [&str; 5] = ["Rank", "User", "Team", "Total Points", "Total Activities"];

/// Decoration tier of a leaderboard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl RankTier {
    /// Tier for a 0-based position. The server's order is the ranking.
    pub fn for_position(index: usize) -> Self {
        match index {
            0 => RankTier::Gold,
            1 => RankTier::Silver,
            2 => RankTier::Bronze,
            _ => RankTier::Standard,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RankTier::Gold => "🥇",
            RankTier::Silver => "🥈",
            RankTier::Bronze => "🥉",
            RankTier::Standard => "",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RankTier::Gold => Tone::Warning,
            RankTier::Silver => Tone::Muted,
            RankTier::Bronze => Tone::Danger,
            RankTier::Standard => Tone::Accent,
        }
    }
}

pub fn project_leaderboard(result: &FetchResult<LeaderboardEntry>) -> ViewModel {
    frame(ResourceKind::Leaderboard, result, |items| {
        ViewModel::Table(TableView {
            summary: Some(format!("{} Competitors", items.len())),
            headers: HEADERS.to_vec(),
            rows: items
                .iter()
                .enumerate()
                .map(|(index, entry)| row(index, entry))
                .collect(),
        })
    })
}

fn row(index: usize, entry: &LeaderboardEntry) -> Vec<Cell> {
    let tier = RankTier::for_position(index);
    let rank = format!("{} {}", tier.icon(), index + 1);
    vec![
        Cell::new(rank.trim_start(), tier.tone()),
        Cell::new(entry.user.to_string(), Tone::Strong),
        Cell::new(entry.team.text_or(NO_TEAM), Tone::Info),
        Cell::new(format!("{} pts", entry.total_points), Tone::Success),
        Cell::new(entry.total_activities.to_string(), Tone::Muted),
    ]
}
