use super::{DeclaredContentType, json_body};
use crate::error::ApiError;
use crate::models::{ApiReply, Gear, GearPayload, GearsPayload};
use crate::state::AppState;
use log::{debug, info, warn};
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};

#[post("/gear/add", data = "<body>")]
pub async fn add_gear(
    content_type: DeclaredContentType,
    body: Option<Json<GearPayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<Gear>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };

    let new_gear = match payload.into_new_gear() {
        Ok(new_gear) => new_gear,
        Err(msg) => {
            debug!("Rejected gear: {msg}");
            return Ok(Json(ApiReply::Message(msg)));
        }
    };

    let gear = state
        .with_store(move |db| Ok(db.create_gear(&new_gear)?))
        .await?;
    info!("Created gear {} ({})", gear.id, gear.nomenclature);

    Ok(Json(ApiReply::Record(gear)))
}

#[get("/gear/get")]
pub async fn get_gears(state: &State<AppState>) -> Result<Json<Vec<Gear>>, ApiError> {
    Ok(Json(state.with_store(|db| Ok(db.list_gear()?)).await?))
}

#[get("/gear/get/<id>")]
pub async fn get_gear(id: i32, state: &State<AppState>) -> Result<Json<Option<Gear>>, ApiError> {
    Ok(Json(state.with_store(move |db| Ok(db.get_gear(id)?)).await?))
}

#[put("/gear/edit/<id>", data = "<body>")]
pub async fn edit_gear(
    id: i32,
    content_type: DeclaredContentType,
    body: Option<Json<GearPayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<Gear>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };
    let changes = payload.into_changeset();

    let gear = state
        .with_store(move |db| {
            db.update_gear(id, &changes)
                .map_err(ApiError::missing("Gear", id))
        })
        .await?;

    Ok(Json(ApiReply::Record(gear)))
}

#[delete("/gear/delete/<id>")]
pub async fn delete_gear(id: i32, state: &State<AppState>) -> Result<Json<&'static str>, ApiError> {
    state
        .with_store(move |db| db.delete_gear(id).map_err(ApiError::missing("Gear", id)))
        .await?;

    info!("Deleted gear {id}");
    Ok(Json("gear removed"))
}

/// Same per-item commit behavior as the bulk member endpoint, keyed on nsn.
#[post("/gear/add/many", data = "<body>")]
pub async fn add_many_gears(
    content_type: DeclaredContentType,
    body: Option<Json<GearsPayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<Vec<Gear>>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };

    let Some(items) = payload.gears else {
        return Ok(Json(ApiReply::message("Error: gears is required")));
    };

    let reply = state
        .with_store(move |db| {
            let mut created = Vec::with_capacity(items.len());

            for item in items {
                let new_gear = match item.into_new_gear() {
                    Ok(new_gear) => new_gear,
                    Err(msg) => {
                        warn!(
                            "Bulk gear create stopped after {} inserts: {msg}",
                            created.len()
                        );
                        return Ok(ApiReply::Message(msg));
                    }
                };

                let nsn = new_gear.nsn.as_deref().unwrap_or_default();
                if db.gear_nsn_exists(nsn)? {
                    warn!(
                        "Bulk gear create stopped after {} inserts: nsn {nsn} already exists",
                        created.len()
                    );
                    return Ok(ApiReply::message("Error: gear already exists"));
                }

                created.push(db.create_gear(&new_gear)?);
            }

            info!("Created {} gear items", created.len());
            Ok(ApiReply::Record(created))
        })
        .await?;

    Ok(Json(reply))
}
