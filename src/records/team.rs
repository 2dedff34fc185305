//! Team cards

use serde_json::Value;

use super::{Record, Resource, ResourceKind, RECORD_KEY_FIELDS};
use crate::display::{format_date, NOT_AVAILABLE};

pub const NAME_FIELDS: &[&str] = &["name"];
pub const DESCRIPTION_FIELDS: &[&str] = &["description"];
pub const MEMBERS_FIELD: &str = "members";
pub const CREATED_FIELDS: &[&str] = &["created_at"];

/// Marker the document-store backend leaves in stringified member lists
pub const MEMBER_REFERENCE_MARKER: &str = "ObjectId";

/// One team card
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub key: String,
    pub name: String,
    pub description: String,
    pub member_count: usize,
    pub created_at: Option<String>,
}

impl TeamRow {
    /// "1 Member" / "3 Members"
    pub fn members_label(&self) -> String {
        if self.member_count == 1 {
            "1 Member".to_string()
        } else {
            format!("{} Members", self.member_count)
        }
    }

    pub fn created(&self) -> String {
        format_date(self.created_at.as_deref())
    }
}

/// Count members from either a JSON array or an embedded-reference string
pub fn member_count(members: Option<&Value>) -> usize {
    match members {
        Some(Value::Array(items)) => items.len(),
        Some(Value::String(text)) => text.matches(MEMBER_REFERENCE_MARKER).count(),
        _ => 0,
    }
}

impl Resource for TeamRow {
    const KIND: ResourceKind = ResourceKind::Teams;

    fn from_record(position: usize, record: &Record) -> Self {
        Self {
            key: record
                .text(RECORD_KEY_FIELDS)
                .unwrap_or_else(|| position.to_string()),
            name: record
                .text(NAME_FIELDS)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            description: record.text(DESCRIPTION_FIELDS).unwrap_or_default(),
            member_count: member_count(record.get(MEMBERS_FIELD)),
            created_at: record.text(CREATED_FIELDS),
        }
    }

    fn key(&self) -> String {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_member_count_array() {
        assert_eq!(member_count(Some(&json!(["a", "b", "c"]))), 3);
    }

    #[test]
    fn test_member_count_reference_string() {
        assert_eq!(member_count(Some(&json!("ObjectId(1) ObjectId(2)"))), 2);
        assert_eq!(
            member_count(Some(&json!("[ObjectId('65a1'), ObjectId('65a2'), ObjectId('65a3')]"))),
            3
        );
        assert_eq!(member_count(Some(&json!("no references"))), 0);
    }

    #[test]
    fn test_member_count_absent() {
        assert_eq!(member_count(None), 0);
        assert_eq!(member_count(Some(&Value::Null)), 0);
        assert_eq!(member_count(Some(&json!(12))), 0);
    }

    #[test]
    fn test_members_label() {
        let mut row = TeamRow::from_record(0, &Record::from_value(json!({"members": ["a"]})));
        assert_eq!(row.members_label(), "1 Member");
        row.member_count = 0;
        assert_eq!(row.members_label(), "0 Members");
    }

    #[test]
    fn test_team_row() {
        let row = TeamRow::from_record(
            2,
            &Record::from_value(json!({
                "name": "Team Marvel",
                "description": "Avengers assemble",
                "members": ["Iron Man", "Thor"]
            })),
        );
        assert_eq!(row.key, "2");
        assert_eq!(row.name, "Team Marvel");
        assert_eq!(row.member_count, 2);
        assert_eq!(row.created(), "N/A");
    }
}
