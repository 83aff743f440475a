use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Detail;
use service::errors::ServiceError;
use tracing::error;

const INTERNAL_ERROR_DETAIL: &str = "Internal server error.";

/// Error response rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Detail::new(self.detail))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let status = match &e {
            ServiceError::Validation(_) | ServiceError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Translation(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Db(_) | ServiceError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(err = %e, status = status.as_u16(), "request failed");
        }
        // driver text stays in the log
        let detail = match &e {
            _ if status == StatusCode::INTERNAL_SERVER_ERROR => INTERNAL_ERROR_DETAIL.to_string(),
            ServiceError::Validation(msg) => msg.clone(),
            _ => e.to_string(),
        };
        Self::new(status, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn maps_domain_errors_to_status() {
        let dup = JsonApiError::from(ServiceError::Duplicate("hello".into()));
        assert_eq!(dup.status, StatusCode::BAD_REQUEST);
        assert_eq!(dup.detail, "Word already exists.");

        let missing = JsonApiError::from(ServiceError::NotFound(1));
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.detail, "Word not found.");

        let invalid = JsonApiError::from(ServiceError::Validation("word must not be empty".into()));
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.detail, "word must not be empty");

        let upstream = JsonApiError::from(ServiceError::Translation("timeout".into()));
        assert_eq!(upstream.status, StatusCode::BAD_GATEWAY);

        let db = JsonApiError::from(ServiceError::Db("disk I/O error".into()));
        assert_eq!(db.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.detail, "Internal server error.");
    }

    #[test]
    fn storage_failure_detail_hides_driver_text() {
        let err = ServiceError::Model(ModelError::Db("no such table: word".into()));
        let api = JsonApiError::from(err);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.detail, "Internal server error.");
        assert!(!api.detail.contains("no such table"));
    }
}
