//! Workout cards

use super::{Record, Resource, ResourceKind, RECORD_KEY_FIELDS};
use crate::display::{NOT_AVAILABLE, ZERO_AMOUNT};

pub const NAME_FIELDS: &[&str] = &["name"];
pub const DESCRIPTION_FIELDS: &[&str] = &["description"];
pub const DIFFICULTY_FIELDS: &[&str] = &["difficulty_level", "difficulty"];
pub const DURATION_FIELDS: &[&str] = &["duration_minutes"];
pub const CALORIES_FIELDS: &[&str] = &["calories_burned"];

/// One workout card
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRow {
    pub key: String,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub duration_minutes: String,
    pub calories_burned: String,
}

impl WorkoutRow {
    pub fn duration(&self) -> String {
        format!("{} min", self.duration_minutes)
    }

    pub fn calories(&self) -> String {
        format!("{} kcal", self.calories_burned)
    }
}

impl Resource for WorkoutRow {
    const KIND: ResourceKind = ResourceKind::Workouts;

    fn from_record(position: usize, record: &Record) -> Self {
        Self {
            key: record
                .text(RECORD_KEY_FIELDS)
                .unwrap_or_else(|| position.to_string()),
            name: record
                .text(NAME_FIELDS)
                .unwrap_or_else(|| "Unnamed Workout".to_string()),
            description: record
                .text(DESCRIPTION_FIELDS)
                .unwrap_or_else(|| "No description available".to_string()),
            difficulty: record
                .text(DIFFICULTY_FIELDS)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            duration_minutes: record
                .amount(DURATION_FIELDS)
                .unwrap_or_else(|| ZERO_AMOUNT.to_string()),
            calories_burned: record
                .amount(CALORIES_FIELDS)
                .unwrap_or_else(|| ZERO_AMOUNT.to_string()),
        }
    }

    fn key(&self) -> String {
        self.key.clone()
    }
}
