use super::{DeclaredContentType, json_body};
use crate::database::DatabaseService;
use crate::error::ApiError;
use crate::models::{ApiReply, Issue, IssuePayload, IssuesPayload, NewIssue};
use crate::state::AppState;
use log::{debug, info, warn};
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};

/// Inserts an issue after confirming its owning member exists.
fn create_owned_issue(db: &DatabaseService, new_issue: &NewIssue) -> Result<Issue, ApiError> {
    if db.get_member(new_issue.member_id)?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Member {} not found",
            new_issue.member_id
        )));
    }

    Ok(db.create_issue(new_issue)?)
}

/// Issue gear to a member
#[post("/issue/add", data = "<body>")]
pub async fn add_issue(
    content_type: DeclaredContentType,
    body: Option<Json<IssuePayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<Issue>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };

    let new_issue = match payload.into_new_issue() {
        Ok(new_issue) => new_issue,
        Err(msg) => {
            debug!("Rejected issue: {msg}");
            return Ok(Json(ApiReply::Message(msg)));
        }
    };

    let issue = state
        .with_store(move |db| create_owned_issue(db, &new_issue))
        .await?;
    info!(
        "Issued nsn {} to member {} (issue {})",
        issue.issue_nsn, issue.member_id, issue.id
    );

    Ok(Json(ApiReply::Record(issue)))
}

#[get("/issue/get")]
pub async fn get_issues(state: &State<AppState>) -> Result<Json<Vec<Issue>>, ApiError> {
    Ok(Json(state.with_store(|db| Ok(db.list_issues()?)).await?))
}

#[get("/issue/get/<id>")]
pub async fn get_issue(id: i32, state: &State<AppState>) -> Result<Json<Option<Issue>>, ApiError> {
    Ok(Json(state.with_store(move |db| Ok(db.get_issue(id)?)).await?))
}

/// Partially update an issue; the owning member cannot be changed
#[put("/issue/edit/<id>", data = "<body>")]
pub async fn edit_issue(
    id: i32,
    content_type: DeclaredContentType,
    body: Option<Json<IssuePayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<Issue>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };

    let changes = match payload.into_changeset() {
        Ok(changes) => changes,
        Err(msg) => {
            debug!("Rejected issue edit: {msg}");
            return Ok(Json(ApiReply::Message(msg)));
        }
    };

    let issue = state
        .with_store(move |db| {
            db.update_issue(id, &changes)
                .map_err(ApiError::missing("Issue", id))
        })
        .await?;

    Ok(Json(ApiReply::Record(issue)))
}

#[delete("/issue/delete/<id>")]
pub async fn delete_issue(
    id: i32,
    state: &State<AppState>,
) -> Result<Json<&'static str>, ApiError> {
    state
        .with_store(move |db| {
            db.delete_issue(id)
                .map_err(ApiError::missing("Issue", id))
        })
        .await?;

    info!("Deleted issue {id}");
    Ok(Json("issue removed"))
}

/// Create issues one by one. An item missing `issue_nsn` or `member_id`
/// ends the call; issues inserted before it stay committed.
#[post("/issue/add/many", data = "<body>")]
pub async fn add_many_issues(
    content_type: DeclaredContentType,
    body: Option<Json<IssuesPayload>>,
    state: &State<AppState>,
) -> Result<Json<ApiReply<Vec<Issue>>>, ApiError> {
    let payload = match json_body(&content_type, body) {
        Ok(payload) => payload,
        Err(msg) => return Ok(Json(ApiReply::message(msg))),
    };

    let Some(items) = payload.issues else {
        return Ok(Json(ApiReply::message("Error: issues is required")));
    };

    let reply = state
        .with_store(move |db| {
            let mut created = Vec::with_capacity(items.len());

            for item in items {
                let new_issue = match item.into_new_issue() {
                    Ok(new_issue) => new_issue,
                    Err(msg) => {
                        warn!(
                            "Bulk issue create stopped after {} inserts: {msg}",
                            created.len()
                        );
                        return Ok(ApiReply::Message(msg));
                    }
                };

                created.push(create_owned_issue(db, &new_issue)?);
            }

            info!("Created {} issues", created.len());
            Ok(ApiReply::Record(created))
        })
        .await?;

    Ok(Json(reply))
}
