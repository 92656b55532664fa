use super::connection::{DbPool, checkout};
use crate::models::issue::Issue;
use crate::models::member::*;
use crate::schema::{issue, member};
use diesel::prelude::*;
use std::collections::HashMap;

/// Member-related database operations
pub struct MemberOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> MemberOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a member and commits it
    pub fn create_member(&self, new_member: &NewMember) -> Result<Member, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(member::table)
            .values(new_member)
            .returning(Member::as_returning())
            .get_result(&mut conn)
    }

    pub fn get_member(&self, id: i32) -> Result<Option<Member>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        member::table
            .find(id)
            .select(Member::as_select())
            .first(&mut conn)
            .optional()
    }

    /// Gets a member together with all of its issues
    pub fn get_member_with_issues(
        &self,
        id: i32,
    ) -> Result<Option<MemberWithIssues>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        let Some(found) = member::table
            .find(id)
            .select(Member::as_select())
            .first(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let all_issues = issue::table
            .filter(issue::member_id.eq(found.id))
            .order(issue::id.asc())
            .select(Issue::as_select())
            .load(&mut conn)?;

        Ok(Some(MemberWithIssues {
            member: found,
            all_issues,
        }))
    }

    /// Lists every member with its issues nested, both ordered by id
    pub fn list_members_with_issues(&self) -> Result<Vec<MemberWithIssues>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        let members = member::table
            .order(member::id.asc())
            .select(Member::as_select())
            .load(&mut conn)?;

        let issues = issue::table
            .order(issue::id.asc())
            .select(Issue::as_select())
            .load(&mut conn)?;

        // Group issues by owning member
        let mut issues_by_member: HashMap<i32, Vec<Issue>> = HashMap::new();
        for row in issues {
            issues_by_member.entry(row.member_id).or_default().push(row);
        }

        Ok(members
            .into_iter()
            .map(|m| MemberWithIssues {
                all_issues: issues_by_member.remove(&m.id).unwrap_or_default(),
                member: m,
            })
            .collect())
    }

    /// Applies the present fields of `changes`. Fails with `NotFound` when
    /// no member has this id.
    pub fn update_member(
        &self,
        id: i32,
        changes: &MemberChangeset,
    ) -> Result<Member, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        if changes.is_empty() {
            return member::table
                .find(id)
                .select(Member::as_select())
                .first(&mut conn);
        }

        diesel::update(member::table.find(id))
            .set(changes)
            .returning(Member::as_returning())
            .get_result(&mut conn)
    }

    /// Deletes a member and every issue it owns
    pub fn delete_member(&self, id: i32) -> Result<(), diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        conn.transaction(|conn| {
            diesel::delete(issue::table.filter(issue::member_id.eq(id))).execute(conn)?;

            let deleted = diesel::delete(member::table.find(id)).execute(conn)?;
            if deleted == 0 {
                return Err(diesel::result::Error::NotFound);
            }

            Ok(())
        })
    }

    pub fn member_edipi_exists(&self, edipi: i64) -> Result<bool, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::select(diesel::dsl::exists(
            member::table.filter(member::edipi.eq(edipi)),
        ))
        .get_result(&mut conn)
    }
}
