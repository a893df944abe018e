use crate::fetch::FetchResult;
use crate::projection::{format_date, frame, Cell, DateStyle, TableView, Tone, ViewModel, NO_TEAM};
use crate::resource::{FieldValue, ResourceKind, User};

const HEADERS: [&str; 5] = ["#", "Username", "Email", "Team", "Member Since"];

pub fn project_users(result: &FetchResult<User>, style: &DateStyle) -> ViewModel {
    frame(ResourceKind::Users, result, |items| {
        ViewModel::Table(TableView {
            summary: Some(format!("{} Members", items.len())),
            headers: HEADERS.to_vec(),
            rows: items.iter().map(|user| row(user, style)).collect(),
        })
    })
}

/// Uppercased first character of the username, `?` when there is none.
pub fn avatar_initial(username: &FieldValue) -> String {
    username
        .to_string()
        .chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

fn row(user: &User, style: &DateStyle) -> Vec<Cell> {
    let team = if user.team.is_truthy() {
        Cell::new(user.team.to_string(), Tone::Success)
    } else {
        Cell::new(NO_TEAM, Tone::Muted)
    };
    vec![
        Cell::new(format!("#{}", user.id), Tone::Strong),
        Cell::new(
            format!("({}) {}", avatar_initial(&user.username), user.username),
            Tone::Strong,
        ),
        Cell::plain(user.email.to_string()),
        team,
        Cell::new(format_date(&user.date_joined, style), Tone::Muted),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn avatar_is_uppercased_first_character() {
        assert_eq!(avatar_initial(&FieldValue::from(json!("ana"))), "A");
        assert_eq!(avatar_initial(&FieldValue::from(json!("élodie"))), "É");
        assert_eq!(avatar_initial(&FieldValue::default()), "?");
    }

    #[test]
    fn team_badge_or_sentinel() {
        let users: Vec<User> = serde_json::from_value(json!([
            {"id": 1, "username": "tony", "email": "t@x.com", "team": "Team Marvel", "date_joined": "2024-02-02"},
            {"id": 2, "username": "bruce", "email": "b@x.com", "team": null, "date_joined": "2024-02-03"}
        ]))
        .unwrap();
        let ViewModel::Table(table) =
            project_users(&FetchResult::Succeeded { items: users }, &DateStyle::default())
        else {
            panic!("expected table");
        };
        assert_eq!(table.rows[0][3], Cell::new("Team Marvel", Tone::Success));
        assert_eq!(table.rows[1][3], Cell::new(NO_TEAM, Tone::Muted));
        assert_eq!(table.rows[0][1].text, "(T) tony");
        assert_eq!(table.summary.as_deref(), Some("2 Members"));
    }
}
