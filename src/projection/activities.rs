use crate::fetch::FetchResult;
use crate::projection::{format_date, frame, Cell, DateStyle, TableView, Tone, ViewModel};
use crate::resource::{Activity, ResourceKind};

const HEADERS: [&str; 7] = [
    "#",
    "User",
    "Activity Type",
    "Duration (min)",
    "Distance (km)",
    "Calories",
    "Date",
];

/// One row per activity, in server order.
pub fn project_activities(result: &FetchResult<Activity>, style: &DateStyle) -> ViewModel {
    frame(ResourceKind::Activities, result, |items| {
        ViewModel::Table(TableView {
            summary: Some(format!("{} Total", items.len())),
            headers: HEADERS.to_vec(),
            rows: items.iter().map(|activity| row(activity, style)).collect(),
        })
    })
}

fn row(activity: &Activity, style: &DateStyle) -> Vec<Cell> {
    vec![
        Cell::new(format!("#{}", activity.id), Tone::Strong),
        Cell::new(activity.user.to_string(), Tone::Muted),
        Cell::new(activity.activity_type.to_string(), Tone::Info),
        Cell::plain(activity.duration.to_string()),
        Cell::plain(activity.distance.to_string()),
        Cell::new(activity.calories_burned.to_string(), Tone::Success),
        Cell::new(format_date(&activity.date, style), Tone::Muted),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn columns_are_fixed() {
        let activity: Activity = serde_json::from_value(json!({
            "id": 7,
            "user": "thor@marvel.com",
            "activity_type": "Running",
            "duration": 30,
            "distance": 5.2,
            "calories_burned": 320,
            "date": "2024-05-02T06:00:00Z"
        }))
        .unwrap();
        let model = project_activities(
            &FetchResult::Succeeded {
                items: vec![activity],
            },
            &DateStyle::default(),
        );

        let ViewModel::Table(table) = model else {
            panic!("expected table");
        };
        assert_eq!(table.headers, HEADERS.to_vec());
        assert_eq!(table.summary.as_deref(), Some("1 Total"));
        let texts: Vec<&str> = table.rows[0].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["#7", "thor@marvel.com", "Running", "30", "5.2", "320", "5/2/2024"]
        );
    }

    #[test]
    fn rows_keep_server_order() {
        let items: Vec<Activity> = (1..=3)
            .rev()
            .map(|id| serde_json::from_value(json!({ "id": id })).unwrap())
            .collect();
        let ViewModel::Table(table) =
            project_activities(&FetchResult::Succeeded { items }, &DateStyle::default())
        else {
            panic!("expected table");
        };
        let ids: Vec<&str> = table.rows.iter().map(|r| r[0].text.as_str()).collect();
        assert_eq!(ids, vec!["#3", "#2", "#1"]);
    }
}
