//! User rows

use super::{Record, Resource, ResourceKind, USER_IDENTITY_FIELDS};
use crate::display::{format_date, NOT_AVAILABLE, ZERO_AMOUNT};

pub const NAME_FIELDS: &[&str] = &["name"];
pub const ALIAS_FIELDS: &[&str] = &["alias"];
pub const EMAIL_FIELDS: &[&str] = &["email"];
/// Some backends embed the team name, others only the raw reference
pub const TEAM_FIELDS: &[&str] = &["team_name", "team"];
pub const FITNESS_LEVEL_FIELDS: &[&str] = &["fitness_level"];
pub const POINTS_FIELDS: &[&str] = &["total_points"];
pub const JOINED_FIELDS: &[&str] = &["created_at"];

/// One row of the users table
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    /// Source record, kept for the edit form
    pub record: Record,
    pub key: String,
    pub name: String,
    pub alias: String,
    pub email: String,
    pub team: String,
    pub fitness_level: String,
    pub total_points: String,
    pub created_at: Option<String>,
}

impl UserRow {
    pub fn points(&self) -> String {
        self.total_points.clone()
    }

    /// Join date in the viewer's local format
    pub fn joined(&self) -> String {
        format_date(self.created_at.as_deref())
    }
}

impl Resource for UserRow {
    const KIND: ResourceKind = ResourceKind::Users;

    fn from_record(position: usize, record: &Record) -> Self {
        let text = |fields: &[&str]| record.text(fields).unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            key: record
                .text(USER_IDENTITY_FIELDS)
                .unwrap_or_else(|| position.to_string()),
            name: text(NAME_FIELDS),
            alias: text(ALIAS_FIELDS),
            email: text(EMAIL_FIELDS),
            team: text(TEAM_FIELDS),
            fitness_level: text(FITNESS_LEVEL_FIELDS),
            total_points: record
                .amount(POINTS_FIELDS)
                .unwrap_or_else(|| ZERO_AMOUNT.to_string()),
            created_at: record.text(JOINED_FIELDS),
            record: record.clone(),
        }
    }

    fn key(&self) -> String {
        self.key.clone()
    }
}
