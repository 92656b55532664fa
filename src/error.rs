use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::response::{Responder, Response};
use rocket::{Request, http::Status};
use std::io::Cursor;

#[derive(Debug)]
pub enum ApiError {
    DatabaseError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::DatabaseError(_) => Status::InternalServerError,
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Conflict(_) => Status::Conflict,
            ApiError::UnprocessableEntity(_) => Status::UnprocessableEntity,
            ApiError::InternalServerError(_) => Status::InternalServerError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::DatabaseError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::UnprocessableEntity(msg)
            | ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Turns a missing row into a `NotFound` naming the record; other store
    /// errors go through the usual conversion.
    pub fn missing(record: &str, id: i32) -> impl FnOnce(DieselError) -> ApiError + '_ {
        move |err| match err {
            DieselError::NotFound => ApiError::NotFound(format!("{record} {id} not found")),
            other => ApiError::from(other),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        let body = serde_json::json!({ "error": self.message() }).to_string();

        Response::build()
            .status(status)
            .header(rocket::http::ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ApiError::NotFound("Record not found".to_string()),
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => ApiError::Conflict(message),
                    DatabaseErrorKind::ForeignKeyViolation => ApiError::NotFound(message),
                    DatabaseErrorKind::NotNullViolation | DatabaseErrorKind::CheckViolation => {
                        ApiError::BadRequest(message)
                    }
                    _ => ApiError::DatabaseError(format!("Database error: {message}")),
                }
            }
            other => ApiError::InternalServerError(format!("Database error: {other}")),
        }
    }
}
