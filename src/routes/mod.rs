pub mod catchers;
pub mod gear;
pub mod health;
pub mod issues;
pub mod members;

use log::debug;
use rocket::http::ContentType;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::routes;
use rocket::serde::json::Json;

pub const NOT_JSON: &str = "Error: request must be JSON";
pub const MALFORMED_BODY: &str = "Error: request body is not valid JSON";

pub fn get_routes() -> Vec<rocket::Route> {
    routes![
        health::health_check,
        // Member routes
        members::add_member,
        members::get_members,
        members::get_member,
        members::edit_member,
        members::delete_member,
        members::add_many_members,
        // Issue routes
        issues::add_issue,
        issues::get_issues,
        issues::get_issue,
        issues::edit_issue,
        issues::delete_issue,
        issues::add_many_issues,
        // Gear routes
        gear::add_gear,
        gear::get_gears,
        gear::get_gear,
        gear::edit_gear,
        gear::delete_gear,
        gear::add_many_gears,
    ]
}

// Request guard exposing the declared Content-Type, present or not
pub struct DeclaredContentType(pub Option<ContentType>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for DeclaredContentType {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(DeclaredContentType(request.content_type().cloned()))
    }
}

impl DeclaredContentType {
    pub fn is_json(&self) -> bool {
        self.0.as_ref().is_some_and(|ct| ct.is_json())
    }
}

/// Unwraps a JSON request body, or yields the message to send back when the
/// request is not JSON or the body does not parse.
pub(crate) fn json_body<T>(
    content_type: &DeclaredContentType,
    body: Option<Json<T>>,
) -> Result<T, &'static str> {
    if !content_type.is_json() {
        debug!("Rejecting request with content type {:?}", content_type.0);
        return Err(NOT_JSON);
    }

    match body {
        Some(Json(payload)) => Ok(payload),
        None => {
            debug!("Rejecting request with unparseable JSON body");
            Err(MALFORMED_BODY)
        }
    }
}
