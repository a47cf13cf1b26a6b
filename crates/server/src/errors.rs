use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Marker placed in the `error` field of every not-found response.
pub const INVALID_ID: &str = "invalid id";

/// Store failures are logged in full; clients only see this.
const INTERNAL_MESSAGE: &str = "the request could not be completed";

/// JSON error envelope: `{"error": <kind marker>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    pub fn malformed(status: StatusCode, message: String) -> Self {
        Self::new(status, "malformed request", Some(message))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error, message: self.message.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(m) => Self::new(StatusCode::NOT_FOUND, INVALID_ID, Some(m)),
            ServiceError::DuplicateKey(m) => Self::new(StatusCode::CONFLICT, "duplicate id", Some(m)),
            e @ ServiceError::InvalidDate(_) => Self::new(StatusCode::BAD_REQUEST, "invalid date", Some(e.to_string())),
            e @ (ServiceError::Seed(_) | ServiceError::Db(_)) => {
                error!(err = %e, "store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error", Some(INTERNAL_MESSAGE.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::malformed(r.status(), r.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        Self::malformed(StatusCode::BAD_REQUEST, r.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("migration failed: {0}")]
    Migration(String),
    #[error("seeding failed: {0}")]
    Seed(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::NotFound("user 1 not found".into()), StatusCode::NOT_FOUND, INVALID_ID),
            (ServiceError::DuplicateKey("user 1 already exists".into()), StatusCode::CONFLICT, "duplicate id"),
            (ServiceError::InvalidDate("1/2".into()), StatusCode::BAD_REQUEST, "invalid date"),
            (ServiceError::Db("disk I/O error".into()), StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        ];
        for (err, status, marker) in cases {
            let api = JsonApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.error, marker);
        }
    }

    #[test]
    fn store_failure_detail_stays_out_of_the_body() {
        let api = JsonApiError::from(ServiceError::Db("no such table: \"order\"".into()));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = api.message.unwrap_or_default();
        assert!(!message.contains("no such table"));
        assert!(!message.contains("database error"));
    }
}
