use super::connection::{DbPool, checkout};
use crate::models::issue::*;
use crate::schema::issue;
use diesel::prelude::*;

/// Issue-related database operations
pub struct IssueOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> IssueOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Inserts an issue. A `member_id` with no member behind it is rejected
    /// by the foreign key.
    pub fn create_issue(&self, new_issue: &NewIssue) -> Result<Issue, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(issue::table)
            .values(new_issue)
            .returning(Issue::as_returning())
            .get_result(&mut conn)
    }

    pub fn get_issue(&self, id: i32) -> Result<Option<Issue>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        issue::table
            .find(id)
            .select(Issue::as_select())
            .first(&mut conn)
            .optional()
    }

    pub fn list_issues(&self) -> Result<Vec<Issue>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        issue::table
            .order(issue::id.asc())
            .select(Issue::as_select())
            .load(&mut conn)
    }

    pub fn update_issue(
        &self,
        id: i32,
        changes: &IssueChangeset,
    ) -> Result<Issue, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        if changes.is_empty() {
            return issue::table
                .find(id)
                .select(Issue::as_select())
                .first(&mut conn);
        }

        diesel::update(issue::table.find(id))
            .set(changes)
            .returning(Issue::as_returning())
            .get_result(&mut conn)
    }

    pub fn delete_issue(&self, id: i32) -> Result<(), diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        match diesel::delete(issue::table.find(id)).execute(&mut conn)? {
            0 => Err(diesel::result::Error::NotFound),
            _ => Ok(()),
        }
    }
}
