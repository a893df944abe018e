use crate::fetch::FetchResult;
use crate::projection::{format_date, frame, Card, Cell, DateStyle, Fact, Tone, ViewModel};
use crate::resource::{ResourceKind, Team};

pub fn project_teams(result: &FetchResult<Team>, style: &DateStyle) -> ViewModel {
    frame(ResourceKind::Teams, result, |items| {
        ViewModel::Cards(items.iter().map(|team| card(team, style)).collect())
    })
}

fn card(team: &Team, style: &DateStyle) -> Card {
    Card {
        title: team.name.to_string(),
        body: team.description.to_string(),
        facts: vec![
            Fact {
                label: "👤 Members",
                value: member_count(team),
            },
            Fact {
                label: "📅 Created",
                value: Cell::new(format_date(&team.created_at, style), Tone::Muted),
            },
        ],
    }
}

fn member_count(team: &Team) -> Cell {
    Cell::new(team.member_count.text_or("0"), Tone::Accent)
}

/// Full view of one already-loaded team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDetail {
    pub title: String,
    pub description: String,
    pub facts: Vec<Fact>,
    /// `None` when the record carries no member list at all.
    pub members: Option<Vec<String>>,
}

pub fn team_detail(team: &Team, style: &DateStyle) -> TeamDetail {
    TeamDetail {
        title: team.name.to_string(),
        description: team.description.to_string(),
        facts: vec![
            Fact {
                label: "ID",
                value: Cell::new(team.id.to_string(), Tone::Muted),
            },
            Fact {
                label: "Members",
                value: member_count(team),
            },
            Fact {
                label: "Created",
                value: Cell::new(format_date(&team.created_at, style), Tone::Plain),
            },
        ],
        members: team.members.list_items(),
    }
}
