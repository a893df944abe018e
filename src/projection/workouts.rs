use crate::fetch::FetchResult;
use crate::projection::{frame, Card, Cell, Fact, Tone, ViewModel};
use crate::resource::{FieldValue, ResourceKind, Workout};

/// Visual tier of a workout's difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    /// Unknown or missing labels render as `Beginner` so the card still shows.
    pub fn from_label(label: &FieldValue) -> Self {
        match label.as_str() {
            Some("Intermediate") => DifficultyTier::Intermediate,
            Some("Advanced") => DifficultyTier::Advanced,
            _ => DifficultyTier::Beginner,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "🟢",
            DifficultyTier::Intermediate => "🟡",
            DifficultyTier::Advanced => "🔴",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            DifficultyTier::Beginner => Tone::Success,
            DifficultyTier::Intermediate => Tone::Warning,
            DifficultyTier::Advanced => Tone::Danger,
        }
    }
}

pub fn project_workouts(result: &FetchResult<Workout>) -> ViewModel {
    frame(ResourceKind::Workouts, result, |items| {
        ViewModel::Cards(items.iter().map(card).collect())
    })
}

fn card(workout: &Workout) -> Card {
    let tier = DifficultyTier::from_label(&workout.difficulty);
    let difficulty = format!("{} {}", tier.icon(), workout.difficulty);
    Card {
        title: workout.name.to_string(),
        body: workout.description.to_string(),
        facts: vec![
            Fact {
                label: "🏃 Type",
                value: Cell::new(workout.workout_type.to_string(), Tone::Info),
            },
            Fact {
                label: "⏱️ Duration",
                value: Cell::new(format!("{} min", workout.duration), Tone::Accent),
            },
            Fact {
                label: "📊 Difficulty",
                value: Cell::new(difficulty.trim_end(), tier.tone()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn difficulty_cell(value: serde_json::Value) -> Cell {
        let workout: Workout = serde_json::from_value(value).unwrap();
        let ViewModel::Cards(cards) = project_workouts(&FetchResult::Succeeded {
            items: vec![workout],
        }) else {
            panic!("expected cards");
        };
        cards[0].facts[2].value.clone()
    }

    #[test]
    fn known_labels_map_to_their_tier() {
        assert_eq!(
            DifficultyTier::from_label(&FieldValue::from(json!("Advanced"))),
            DifficultyTier::Advanced
        );
        assert_eq!(
            DifficultyTier::from_label(&FieldValue::from(json!("Intermediate"))),
            DifficultyTier::Intermediate
        );
    }

    #[test]
    fn unknown_or_missing_difficulty_falls_back_to_beginner() {
        let beginner = difficulty_cell(json!({"name": "Plank", "difficulty": "Beginner"}));
        let missing = difficulty_cell(json!({"name": "Plank"}));
        let unknown = difficulty_cell(json!({"name": "Plank", "difficulty": "hard"}));

        assert_eq!(missing.tone, beginner.tone);
        assert_eq!(unknown.tone, beginner.tone);
        assert_eq!(unknown.text, "🟢 hard");
        assert_eq!(missing.text, "🟢");
    }

    #[test]
    fn duration_is_in_minutes() {
        let workout: Workout =
            serde_json::from_value(json!({"name": "HIIT", "duration": 20, "workout_type": "Cardio"}))
                .unwrap();
        let ViewModel::Cards(cards) = project_workouts(&FetchResult::Succeeded {
            items: vec![workout],
        }) else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].facts[0].value.text, "Cardio");
        assert_eq!(cards[0].facts[1].value.text, "20 min");
    }
}
