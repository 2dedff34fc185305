//! Resource Records
//!
//! Records arrive from the backend as loosely shaped JSON objects. The client
//! never owns their schema: it only looks fields up through ordered fallback
//! lists, so a backend that renames `difficulty` to `difficulty_level` keeps
//! rendering.
//!
//! ## Modules
//!
//! - [`user`], [`team`], [`workout`], [`activity`], [`leaderboard`]: display
//!   rows with their derived fields

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::ActivityRow;
pub use leaderboard::LeaderboardRow;
pub use team::TeamRow;
pub use user::UserRow;
pub use workout::WorkoutRow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::display::format_number;

/// Fields that identify a user, in lookup order
pub const USER_IDENTITY_FIELDS: &[&str] = &["id", "email"];

/// Fields that identify any other record
pub const RECORD_KEY_FIELDS: &[&str] = &["id"];

/// The five collections exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Users,
    Teams,
    Workouts,
    Activities,
    Leaderboard,
}

/// How a collection is laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Table,
    Cards,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Users,
        ResourceKind::Teams,
        ResourceKind::Workouts,
        ResourceKind::Activities,
        ResourceKind::Leaderboard,
    ];

    /// Path segment appended to the API base URL
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Users => "users/",
            Self::Teams => "teams/",
            Self::Workouts => "workouts/",
            Self::Activities => "activities/",
            Self::Leaderboard => "leaderboard/",
        }
    }

    /// Lowercase name, also the route path without the slash
    pub fn name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Teams => "teams",
            Self::Workouts => "workouts",
            Self::Activities => "activities",
            Self::Leaderboard => "leaderboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Teams => "Teams",
            Self::Workouts => "Workouts",
            Self::Activities => "Activities",
            Self::Leaderboard => "Leaderboard",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Users => "👥",
            Self::Teams => "🏅",
            Self::Workouts => "💪",
            Self::Activities => "🏃",
            Self::Leaderboard => "🏆",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Users => "View all registered users and their team information",
            Self::Teams => "Explore our competitive fitness teams",
            Self::Workouts => "Browse available workout programs and training plans",
            Self::Activities => "Track all fitness activities and achievements",
            Self::Leaderboard => "Top performers and competitive rankings",
        }
    }

    pub fn loading_message(&self) -> String {
        format!("Loading {}...", self.name())
    }

    /// Placeholder shown when the collection is empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::Users => "No users found",
            Self::Teams => "No teams found. Be the first to create one!",
            Self::Workouts => "No workouts available at the moment.",
            Self::Activities => "No activities recorded yet",
            Self::Leaderboard => "No leaderboard data available",
        }
    }

    /// Label in front of the trailing element count
    pub fn count_label(&self) -> &'static str {
        match self {
            Self::Users => "Total Users",
            Self::Teams => "Total Teams",
            Self::Workouts => "Total Workouts",
            Self::Activities => "Total Activities",
            Self::Leaderboard => "Total Competitors",
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::Teams | Self::Workouts => Layout::Cards,
            Self::Users | Self::Activities | Self::Leaderboard => Layout::Table,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A display row built from one raw record
pub trait Resource: Clone + 'static {
    const KIND: ResourceKind;

    /// Build the row; `position` is the zero-based index in received order
    fn from_record(position: usize, record: &Record) -> Self;

    /// Stable key for list rendering
    fn key(&self) -> String;
}

/// A raw backend record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap a JSON value; anything but an object becomes an empty record
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// First truthy value among `fields`
    pub fn raw(&self, fields: &[&str]) -> Option<&Value> {
        fields
            .iter()
            .filter_map(|field| self.0.get(*field))
            .find(|value| is_truthy(value))
    }

    /// First truthy value among `fields`, as display text
    pub fn text(&self, fields: &[&str]) -> Option<String> {
        self.raw(fields).map(value_to_text)
    }

    /// First truthy numeric value among `fields`
    pub fn number(&self, fields: &[&str]) -> Option<f64> {
        fields
            .iter()
            .filter_map(|field| self.0.get(*field))
            .filter(|value| is_truthy(value))
            .find_map(|value| match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .filter(|n| *n != 0.0 && !n.is_nan())
    }

    /// First truthy value among `fields` as a display amount
    ///
    /// Numbers drop a whole `.0`; text the backend sent is kept verbatim.
    pub fn amount(&self, fields: &[&str]) -> Option<String> {
        self.raw(fields).map(|value| match value {
            Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
            other => value_to_text(other),
        })
    }

    /// First truthy integral value among `fields`
    pub fn integer(&self, fields: &[&str]) -> Option<i64> {
        self.number(fields)
            .filter(|n| n.fract() == 0.0)
            .map(|n| n as i64)
    }

    /// Identifier used in the update URL: the id, else the email
    pub fn identity(&self) -> Option<String> {
        self.text(USER_IDENTITY_FIELDS)
    }
}

/// Whether a value counts as present when picking between fallback fields
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value)
    }

    #[test]
    fn test_first_truthy_field_wins() {
        let r = record(json!({"difficulty_level": "", "difficulty": "hard"}));
        assert_eq!(r.text(&["difficulty_level", "difficulty"]).as_deref(), Some("hard"));

        let r = record(json!({"difficulty_level": "easy", "difficulty": "hard"}));
        assert_eq!(r.text(&["difficulty_level", "difficulty"]).as_deref(), Some("easy"));
    }

    #[test]
    fn test_null_and_missing_fall_through() {
        let r = record(json!({"user_name": null, "user": "ironman"}));
        assert_eq!(r.text(&["user_name", "user"]).as_deref(), Some("ironman"));
        assert_eq!(r.text(&["nothing"]), None);
    }

    #[test]
    fn test_numeric_text() {
        let r = record(json!({"id": 42}));
        assert_eq!(r.text(&["id"]).as_deref(), Some("42"));
    }

    #[test]
    fn test_number_lookup() {
        let r = record(json!({"a": 0, "b": "12.5", "c": 3}));
        assert_eq!(r.number(&["a", "b"]), Some(12.5));
        assert_eq!(r.number(&["a"]), None);
        assert_eq!(r.integer(&["c"]), Some(3));
        assert_eq!(r.integer(&["b"]), None);
    }

    #[test]
    fn test_amount_keeps_backend_text() {
        let r = record(json!({"a": 0, "b": 45.0, "c": "abc", "d": "12.50"}));
        assert_eq!(r.amount(&["a", "b"]).as_deref(), Some("45"));
        assert_eq!(r.amount(&["c"]).as_deref(), Some("abc"));
        assert_eq!(r.amount(&["d"]).as_deref(), Some("12.50"));
        assert_eq!(r.amount(&["a"]), None);
        assert_eq!(r.number(&["c"]), None);
    }

    #[test]
    fn test_identity_prefers_id() {
        assert_eq!(record(json!({"id": 7, "email": "a@b.c"})).identity().as_deref(), Some("7"));
        assert_eq!(record(json!({"email": "a@b.c"})).identity().as_deref(), Some("a@b.c"));
        assert_eq!(record(json!({})).identity(), None);
    }

    #[test]
    fn test_non_object_is_empty_record() {
        assert_eq!(record(json!("loose string")), Record::default());
        assert_eq!(record(json!(5)).get("0"), None);
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(ResourceKind::Leaderboard.segment(), "leaderboard/");
        assert_eq!(ResourceKind::Teams.layout(), Layout::Cards);
        assert_eq!(ResourceKind::Users.layout(), Layout::Table);
        assert_eq!(ResourceKind::Workouts.loading_message(), "Loading workouts...");
        assert_eq!(ResourceKind::Leaderboard.count_label(), "Total Competitors");
    }
}
