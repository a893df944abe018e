//! Item shapes for each collection.
//!
//! Records are lenient: every field may be absent, scalars are kept as raw
//! JSON, and unknown fields are ignored. Only the projection interprets them.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::fetch::{FetchErrorKind, FetchResult};
use crate::resource::ResourceKind;

/// Raw JSON field, displayed without quotes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// JavaScript-style truthiness: null, `false`, `0` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Display text, or `fallback` when the value is falsy.
    pub fn text_or(&self, fallback: &str) -> String {
        if self.is_truthy() {
            self.to_string()
        } else {
            fallback.to_string()
        }
    }

    /// Elements of an array value, each rendered as text.
    ///
    /// Objects are shown by their `name` or `username` field when present.
    pub fn list_items(&self) -> Option<Vec<String>> {
        let Value::Array(values) = &self.0 else {
            return None;
        };
        let names = values
            .iter()
            .map(|value| match value {
                Value::Object(map) => map
                    .get("name")
                    .or_else(|| map.get("username"))
                    .map(|name| FieldValue(name.clone()).to_string())
                    .unwrap_or_else(|| value.to_string()),
                other => FieldValue(other.clone()).to_string(),
            })
            .collect();
        Some(names)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: FieldValue,
    pub user: FieldValue,
    pub activity_type: FieldValue,
    pub duration: FieldValue,
    pub distance: FieldValue,
    pub calories_burned: FieldValue,
    pub date: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub id: FieldValue,
    pub user: FieldValue,
    pub team: FieldValue,
    pub total_points: FieldValue,
    pub total_activities: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: FieldValue,
    pub name: FieldValue,
    pub description: FieldValue,
    pub member_count: FieldValue,
    pub created_at: FieldValue,
    pub members: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: FieldValue,
    pub username: FieldValue,
    pub email: FieldValue,
    pub team: FieldValue,
    pub date_joined: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Workout {
    pub id: FieldValue,
    pub name: FieldValue,
    pub description: FieldValue,
    pub workout_type: FieldValue,
    pub duration: FieldValue,
    pub difficulty: FieldValue,
}

/// Item-shape descriptor: binds an item type to the collection serving it.
pub trait ResourceItem: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Erase the item type so results of any collection can share one view slot.
    fn wrap(result: FetchResult<Self>) -> ResourceState;
}

macro_rules! resource_item {
    ($item:ty, $kind:ident) => {
        impl ResourceItem for $item {
            const KIND: ResourceKind = ResourceKind::$kind;

            fn wrap(result: FetchResult<Self>) -> ResourceState {
                ResourceState::$kind(result)
            }
        }
    };
}

resource_item!(Activity, Activities);
resource_item!(LeaderboardEntry, Leaderboard);
resource_item!(Team, Teams);
resource_item!(User, Users);
resource_item!(Workout, Workouts);

/// Fetch result of whichever collection is on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState {
    Activities(FetchResult<Activity>),
    Leaderboard(FetchResult<LeaderboardEntry>),
    Teams(FetchResult<Team>),
    Users(FetchResult<User>),
    Workouts(FetchResult<Workout>),
}

macro_rules! each_state {
    ($state:expr, $result:ident => $body:expr) => {
        match $state {
            ResourceState::Activities($result) => $body,
            ResourceState::Leaderboard($result) => $body,
            ResourceState::Teams($result) => $body,
            ResourceState::Users($result) => $body,
            ResourceState::Workouts($result) => $body,
        }
    };
}

impl ResourceState {
    pub fn loading(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Activities => Self::Activities(FetchResult::Loading),
            ResourceKind::Leaderboard => Self::Leaderboard(FetchResult::Loading),
            ResourceKind::Teams => Self::Teams(FetchResult::Loading),
            ResourceKind::Users => Self::Users(FetchResult::Loading),
            ResourceKind::Workouts => Self::Workouts(FetchResult::Loading),
        }
    }

    /// A lifecycle for `kind` that ended before any request went out.
    pub fn failed(kind: ResourceKind, error: FetchErrorKind, message: impl Into<String>) -> Self {
        macro_rules! failed {
            ($variant:ident) => {
                Self::$variant(FetchResult::Failed {
                    kind: error,
                    message: message.into(),
                })
            };
        }
        match kind {
            ResourceKind::Activities => failed!(Activities),
            ResourceKind::Leaderboard => failed!(Leaderboard),
            ResourceKind::Teams => failed!(Teams),
            ResourceKind::Users => failed!(Users),
            ResourceKind::Workouts => failed!(Workouts),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Activities(_) => ResourceKind::Activities,
            Self::Leaderboard(_) => ResourceKind::Leaderboard,
            Self::Teams(_) => ResourceKind::Teams,
            Self::Users(_) => ResourceKind::Users,
            Self::Workouts(_) => ResourceKind::Workouts,
        }
    }

    pub fn is_loading(&self) -> bool {
        each_state!(self, result => result.is_loading())
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Number of loaded items; zero unless succeeded.
    pub fn item_count(&self) -> usize {
        each_state!(self, result => result.items().map_or(0, <[_]>::len))
    }

    pub fn error_message(&self) -> Option<&str> {
        each_state!(self, result => result.error_message())
    }
}
