use super::{DeclaredContentType, json_body};
use crate::error::ApiError;
use crate::models::{ApiReply, MemberPayload, MemberWithIssues, MembersPayload};
use crate::state::AppState;
use log::{debug, info, warn};
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};

/// Create a member
#[post("/member/add", data = "<body>")]
pub async fn add_member(
    content_type: DeclaredContentType,
    body: Option<Json<MemberPayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<MemberWithIssues>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };

    let new_member = match payload.into_new_member() {
        Ok(new_member) => new_member,
        Err(msg) => {
            debug!("Rejected member: {msg}");
            return Ok(Json(ApiReply::Message(msg)));
        }
    };

    let member = state
        .with_store(move |db| Ok(db.create_member(&new_member)?))
        .await?;
    info!("Created member {} (edipi {})", member.id, member.edipi);

    Ok(Json(ApiReply::Record(MemberWithIssues {
        member,
        all_issues: Vec::new(),
    })))
}

/// List all members with their issues
#[get("/member/get")]
pub async fn get_members(
    state: &State<AppState>,
) -> Result<Json<Vec<MemberWithIssues>>, ApiError> {
    let members = state
        .with_store(|db| Ok(db.list_members_with_issues()?))
        .await?;
    Ok(Json(members))
}

/// Get one member with its issues; `null` when there is no such member
#[get("/member/get/<id>")]
pub async fn get_member(
    id: i32,
    state: &State<AppState>,
) -> Result<Json<Option<MemberWithIssues>>, ApiError> {
    let member = state
        .with_store(move |db| Ok(db.get_member_with_issues(id)?))
        .await?;
    Ok(Json(member))
}

/// Partially update a member
#[put("/member/edit/<id>", data = "<body>")]
pub async fn edit_member(
    id: i32,
    content_type: DeclaredContentType,
    body: Option<Json<MemberPayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<MemberWithIssues>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };
    let changes = payload.into_changeset();

    let member = state
        .with_store(move |db| {
            db.update_member(id, &changes)
                .map_err(ApiError::missing("Member", id))?;

            db.get_member_with_issues(id)?
                .ok_or_else(|| ApiError::NotFound(format!("Member {id} not found")))
        })
        .await?;

    Ok(Json(ApiReply::Record(member)))
}

/// Delete a member and every issue it owns
#[delete("/member/delete/<id>")]
pub async fn delete_member(
    id: i32,
    state: &State<AppState>,
) -> Result<Json<&'static str>, ApiError> {
    state
        .with_store(move |db| {
            db.delete_member(id)
                .map_err(ApiError::missing("Member", id))
        })
        .await?;

    info!("Deleted member {id}");
    Ok(Json("member removed"))
}

/// Create members one by one. Stops at the first invalid item or taken
/// edipi; members inserted before that point stay committed.
#[post("/member/add/many", data = "<body>")]
pub async fn add_many_members(
    content_type: DeclaredContentType,
    body: Option<Json<MembersPayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<Vec<MemberWithIssues>>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };

    let Some(items) = payload.members else {
        return Ok(Json(ApiReply::message("Error: members is required")));
    };

    let reply = state
        .with_store(move |db| {
            let mut created = Vec::with_capacity(items.len());

            for item in items {
                let new_member = match item.into_new_member() {
                    Ok(new_member) => new_member,
                    Err(msg) => {
                        warn!(
                            "Bulk member create stopped after {} inserts: {msg}",
                            created.len()
                        );
                        return Ok(ApiReply::Message(msg));
                    }
                };

                if db.member_edipi_exists(new_member.edipi)? {
                    warn!(
                        "Bulk member create stopped after {} inserts: edipi {} already exists",
                        created.len(),
                        new_member.edipi
                    );
                    return Ok(ApiReply::message("Error: member already exists"));
                }

                let member = db.create_member(&new_member)?;
                created.push(MemberWithIssues {
                    member,
                    all_issues: Vec::new(),
                });
            }

            info!("Created {} members", created.len());
            Ok(ApiReply::Record(created))
        })
        .await?;

    Ok(Json(reply))
}
