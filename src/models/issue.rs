use crate::schema::issue;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};
use serde::{Deserializer, de::Error as _};
use serde_json::Value;

pub const MAX_ISSUE_NOTE_CHARS: usize = 500;

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = issue)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Issue {
    pub id: i32,
    pub issue_nomenclature: Option<String>,
    pub issue_size: Option<String>,
    pub issue_nsn: String,
    pub issue_note: Option<String>,
    pub issue_count: Option<i32>,
    pub member_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = issue)]
pub struct NewIssue {
    pub issue_nomenclature: Option<String>,
    pub issue_size: Option<String>,
    pub issue_nsn: String,
    pub issue_note: Option<String>,
    pub issue_count: Option<i32>,
    pub member_id: i32,
}

/// The owning member is fixed at creation, so `member_id` is not patchable.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = issue)]
pub struct IssueChangeset {
    pub issue_nomenclature: Option<String>,
    pub issue_size: Option<String>,
    pub issue_nsn: Option<String>,
    pub issue_note: Option<String>,
    pub issue_count: Option<i32>,
}

impl IssueChangeset {
    pub fn is_empty(&self) -> bool {
        self.issue_nomenclature.is_none()
            && self.issue_size.is_none()
            && self.issue_nsn.is_none()
            && self.issue_note.is_none()
            && self.issue_count.is_none()
    }
}

// Request models
#[derive(Deserialize, Debug, Clone, Default)]
pub struct IssuePayload {
    pub issue_nomenclature: Option<String>,
    pub issue_size: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub issue_nsn: Option<String>,
    pub issue_note: Option<String>,
    pub issue_count: Option<i32>,
    pub member_id: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct IssuesPayload {
    pub issues: Option<Vec<IssuePayload>>,
}

impl IssuePayload {
    pub fn into_new_issue(self) -> Result<NewIssue, String> {
        let issue_nsn = self.issue_nsn.ok_or("Error: issue_nsn is required")?;
        let member_id = self.member_id.ok_or("Error: member_id is required")?;
        validate_issue_note(self.issue_note.as_deref())?;

        Ok(NewIssue {
            issue_nomenclature: self.issue_nomenclature,
            issue_size: self.issue_size,
            issue_nsn,
            issue_note: self.issue_note,
            issue_count: self.issue_count,
            member_id,
        })
    }

    pub fn into_changeset(self) -> Result<IssueChangeset, String> {
        validate_issue_note(self.issue_note.as_deref())?;

        Ok(IssueChangeset {
            issue_nomenclature: self.issue_nomenclature,
            issue_size: self.issue_size,
            issue_nsn: self.issue_nsn,
            issue_note: self.issue_note,
            issue_count: self.issue_count,
        })
    }
}

pub fn validate_issue_note(note: Option<&str>) -> Result<(), String> {
    match note {
        Some(note) if note.chars().count() > MAX_ISSUE_NOTE_CHARS => Err(format!(
            "Error: issue_note cannot be longer than {MAX_ISSUE_NOTE_CHARS} characters"
        )),
        _ => Ok(()),
    }
}

/// Stock numbers arrive as either JSON strings or bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "issue_nsn must be a string or a number, got {other}"
        ))),
    }
}
