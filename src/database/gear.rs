use super::connection::{DbPool, checkout};
use crate::models::gear::*;
use crate::schema::gear;
use diesel::prelude::*;

/// Gear-related database operations
pub struct GearOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> GearOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_gear(&self, new_gear: &NewGear) -> Result<Gear, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(gear::table)
            .values(new_gear)
            .returning(Gear::as_returning())
            .get_result(&mut conn)
    }

    pub fn get_gear(&self, id: i32) -> Result<Option<Gear>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        gear::table
            .find(id)
            .select(Gear::as_select())
            .first(&mut conn)
            .optional()
    }

    pub fn list_gear(&self) -> Result<Vec<Gear>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        gear::table
            .order(gear::id.asc())
            .select(Gear::as_select())
            .load(&mut conn)
    }

    pub fn update_gear(
        &self,
        id: i32,
        changes: &GearChangeset,
    ) -> Result<Gear, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        if changes.is_empty() {
            return gear::table
                .find(id)
                .select(Gear::as_select())
                .first(&mut conn);
        }

        diesel::update(gear::table.find(id))
            .set(changes)
            .returning(Gear::as_returning())
            .get_result(&mut conn)
    }

    pub fn delete_gear(&self, id: i32) -> Result<(), diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        match diesel::delete(gear::table.find(id)).execute(&mut conn)? {
            0 => Err(diesel::result::Error::NotFound),
            _ => Ok(()),
        }
    }

    pub fn gear_nsn_exists(&self, nsn: &str) -> Result<bool, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::select(diesel::dsl::exists(gear::table.filter(gear::nsn.eq(nsn))))
            .get_result(&mut conn)
    }
}
