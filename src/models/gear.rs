use crate::schema::gear;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = gear)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Gear {
    pub id: i32,
    pub category: String,
    pub nomenclature: String,
    pub size: String,
    pub nsn: Option<String>,
    pub gear_img: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = gear)]
pub struct NewGear {
    pub category: String,
    pub nomenclature: String,
    pub size: String,
    pub nsn: Option<String>,
    pub gear_img: Option<String>,
}

#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = gear)]
pub struct GearChangeset {
    pub category: Option<String>,
    pub nomenclature: Option<String>,
    pub size: Option<String>,
    pub nsn: Option<String>,
    pub gear_img: Option<String>,
}

impl GearChangeset {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.nomenclature.is_none()
            && self.size.is_none()
            && self.nsn.is_none()
            && self.gear_img.is_none()
    }
}

// Request models
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GearPayload {
    pub category: Option<String>,
    pub nomenclature: Option<String>,
    pub size: Option<String>,
    pub nsn: Option<String>,
    pub gear_img: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GearsPayload {
    pub gears: Option<Vec<GearPayload>>,
}

impl GearPayload {
    pub fn into_new_gear(self) -> Result<NewGear, String> {
        let category = self.category.ok_or("Error: category is required")?;
        let nomenclature = self.nomenclature.ok_or("Error: nomenclature is required")?;
        let size = self.size.ok_or("Error: size is required")?;
        let nsn = self.nsn.ok_or("Error: nsn is required")?;

        Ok(NewGear {
            category,
            nomenclature,
            size,
            nsn: Some(nsn),
            gear_img: self.gear_img,
        })
    }

    pub fn into_changeset(self) -> GearChangeset {
        GearChangeset {
            category: self.category,
            nomenclature: self.nomenclature,
            size: self.size,
            nsn: self.nsn,
            gear_img: self.gear_img,
        }
    }
}
