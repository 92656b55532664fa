use crate::error::ApiError;
use log::{error, warn};
use rocket::{Request, catch, catchers};

pub fn get_catchers() -> Vec<rocket::Catcher> {
    catchers![not_found, unprocessable, internal_error]
}

#[catch(404)]
fn not_found(req: &Request) -> ApiError {
    ApiError::NotFound(format!("No route for {} {}", req.method(), req.uri()))
}

// Raised when a path segment such as `<id>` does not parse
#[catch(422)]
fn unprocessable(req: &Request) -> ApiError {
    warn!("Unprocessable request {} {}", req.method(), req.uri());
    ApiError::UnprocessableEntity(format!(
        "Error: could not process {} {}",
        req.method(),
        req.uri()
    ))
}

#[catch(500)]
fn internal_error(req: &Request) -> ApiError {
    error!("Unhandled failure serving {} {}", req.method(), req.uri());
    ApiError::InternalServerError("Internal server error".to_string())
}
