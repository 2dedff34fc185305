//! Activity rows

use super::{Record, Resource, ResourceKind, RECORD_KEY_FIELDS};
use crate::display::{format_date, NOT_AVAILABLE, ZERO_AMOUNT};

pub const USER_FIELDS: &[&str] = &["user_name", "user"];
pub const TYPE_FIELDS: &[&str] = &["activity_type"];
pub const DURATION_FIELDS: &[&str] = &["duration_minutes"];
pub const DISTANCE_FIELDS: &[&str] = &["distance_km"];
pub const CALORIES_FIELDS: &[&str] = &["calories_burned"];
pub const DATE_FIELDS: &[&str] = &["date"];

/// Shown when an activity names no user
pub const ANONYMOUS_USER: &str = "User";

/// One row of the activities table
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub key: String,
    pub user: String,
    pub activity_type: String,
    pub duration_minutes: String,
    pub distance_km: String,
    pub calories_burned: String,
    pub date: Option<String>,
}

impl ActivityRow {
    pub fn duration(&self) -> String {
        format!("{} min", self.duration_minutes)
    }

    pub fn distance(&self) -> String {
        format!("{} km", self.distance_km)
    }

    pub fn calories(&self) -> String {
        format!("{} kcal", self.calories_burned)
    }

    pub fn day(&self) -> String {
        format_date(self.date.as_deref())
    }
}

impl Resource for ActivityRow {
    const KIND: ResourceKind = ResourceKind::Activities;

    fn from_record(position: usize, record: &Record) -> Self {
        Self {
            key: record
                .text(RECORD_KEY_FIELDS)
                .unwrap_or_else(|| position.to_string()),
            user: record
                .text(USER_FIELDS)
                .unwrap_or_else(|| ANONYMOUS_USER.to_string()),
            activity_type: record
                .text(TYPE_FIELDS)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            duration_minutes: record
                .amount(DURATION_FIELDS)
                .unwrap_or_else(|| ZERO_AMOUNT.to_string()),
            distance_km: record
                .amount(DISTANCE_FIELDS)
                .unwrap_or_else(|| ZERO_AMOUNT.to_string()),
            calories_burned: record
                .amount(CALORIES_FIELDS)
                .unwrap_or_else(|| ZERO_AMOUNT.to_string()),
            date: record.text(DATE_FIELDS),
        }
    }

    fn key(&self) -> String {
        self.key.clone()
    }
}
