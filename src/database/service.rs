use super::connection::{DbConnection, DbPool, create_pool, get_connection_with_retry};
use super::gear::GearOperations;
use super::issues::IssueOperations;
use super::members::MemberOperations;
use crate::models::gear::*;
use crate::models::issue::*;
use crate::models::member::*;

/// Store handle shared by every request handler. Each call checks out its
/// own connection and commits before returning.
#[derive(Debug)]
pub struct DatabaseService {
    pub pool: DbPool,
}

impl DatabaseService {
    /// Creates a new DatabaseService with an initialized connection pool
    pub fn new(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = create_pool(database_url)?;
        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> Result<DbConnection, diesel::r2d2::Error> {
        get_connection_with_retry(&self.pool)
    }

    // Member operations
    pub fn create_member(&self, new_member: &NewMember) -> Result<Member, diesel::result::Error> {
        MemberOperations::new(&self.pool).create_member(new_member)
    }

    pub fn get_member(&self, id: i32) -> Result<Option<Member>, diesel::result::Error> {
        MemberOperations::new(&self.pool).get_member(id)
    }

    pub fn get_member_with_issues(
        &self,
        id: i32,
    ) -> Result<Option<MemberWithIssues>, diesel::result::Error> {
        MemberOperations::new(&self.pool).get_member_with_issues(id)
    }

    pub fn list_members_with_issues(&self) -> Result<Vec<MemberWithIssues>, diesel::result::Error> {
        MemberOperations::new(&self.pool).list_members_with_issues()
    }

    pub fn update_member(
        &self,
        id: i32,
        changes: &MemberChangeset,
    ) -> Result<Member, diesel::result::Error> {
        MemberOperations::new(&self.pool).update_member(id, changes)
    }

    pub fn delete_member(&self, id: i32) -> Result<(), diesel::result::Error> {
        MemberOperations::new(&self.pool).delete_member(id)
    }

    pub fn member_edipi_exists(&self, edipi: i64) -> Result<bool, diesel::result::Error> {
        MemberOperations::new(&self.pool).member_edipi_exists(edipi)
    }

    // Gear operations
    pub fn create_gear(&self, new_gear: &NewGear) -> Result<Gear, diesel::result::Error> {
        GearOperations::new(&self.pool).create_gear(new_gear)
    }

    pub fn get_gear(&self, id: i32) -> Result<Option<Gear>, diesel::result::Error> {
        GearOperations::new(&self.pool).get_gear(id)
    }

    pub fn list_gear(&self) -> Result<Vec<Gear>, diesel::result::Error> {
        GearOperations::new(&self.pool).list_gear()
    }

    pub fn update_gear(
        &self,
        id: i32,
        changes: &GearChangeset,
    ) -> Result<Gear, diesel::result::Error> {
        GearOperations::new(&self.pool).update_gear(id, changes)
    }

    pub fn delete_gear(&self, id: i32) -> Result<(), diesel::result::Error> {
        GearOperations::new(&self.pool).delete_gear(id)
    }

    pub fn gear_nsn_exists(&self, nsn: &str) -> Result<bool, diesel::result::Error> {
        GearOperations::new(&self.pool).gear_nsn_exists(nsn)
    }

    // Issue operations
    pub fn create_issue(&self, new_issue: &NewIssue) -> Result<Issue, diesel::result::Error> {
        IssueOperations::new(&self.pool).create_issue(new_issue)
    }

    pub fn get_issue(&self, id: i32) -> Result<Option<Issue>, diesel::result::Error> {
        IssueOperations::new(&self.pool).get_issue(id)
    }

    pub fn list_issues(&self) -> Result<Vec<Issue>, diesel::result::Error> {
        IssueOperations::new(&self.pool).list_issues()
    }

    pub fn update_issue(
        &self,
        id: i32,
        changes: &IssueChangeset,
    ) -> Result<Issue, diesel::result::Error> {
        IssueOperations::new(&self.pool).update_issue(id, changes)
    }

    pub fn delete_issue(&self, id: i32) -> Result<(), diesel::result::Error> {
        IssueOperations::new(&self.pool).delete_issue(id)
    }
}
