use crate::models::issue::Issue;
use crate::schema::member;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = member)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub edipi: i64,
    pub email: Option<String>,
    pub phone_num: Option<i64>,
}

/// `name` stays optional: a missing name is left for the NOT NULL
/// constraint to reject.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = member)]
pub struct NewMember {
    pub name: Option<String>,
    pub edipi: i64,
    pub email: Option<String>,
    pub phone_num: Option<i64>,
}

#[derive(AsChangeset, Debug, Clone, Default, PartialEq)]
#[diesel(table_name = member)]
pub struct MemberChangeset {
    pub name: Option<String>,
    pub edipi: Option<i64>,
    pub email: Option<String>,
    pub phone_num: Option<i64>,
}

impl MemberChangeset {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.edipi.is_none()
            && self.email.is_none()
            && self.phone_num.is_none()
    }
}

/// Member serialized together with the issues it owns.
#[derive(Serialize, Debug, Clone)]
pub struct MemberWithIssues {
    #[serde(flatten)]
    pub member: Member,
    pub all_issues: Vec<Issue>,
}

// Request models
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MemberPayload {
    pub name: Option<String>,
    pub edipi: Option<i64>,
    pub email: Option<String>,
    pub phone_num: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct MembersPayload {
    pub members: Option<Vec<MemberPayload>>,
}

impl MemberPayload {
    pub fn into_new_member(self) -> Result<NewMember, String> {
        let edipi = self.edipi.ok_or("Error: edipi is required")?;
        let email = self.email.ok_or("Error: email is required")?;
        let phone_num = self.phone_num.ok_or("Error: phone_num is required")?;

        Ok(NewMember {
            name: self.name,
            edipi,
            email: Some(email),
            phone_num: Some(phone_num),
        })
    }

    pub fn into_changeset(self) -> MemberChangeset {
        MemberChangeset {
            name: self.name,
            edipi: self.edipi,
            email: self.email,
            phone_num: self.phone_num,
        }
    }
}
