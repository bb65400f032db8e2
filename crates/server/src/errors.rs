use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// A service failure on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::AlreadyExists(_)
            | ServiceError::ReferenceNotFound { .. }
            | ServiceError::ProvinceNotFound(_) => StatusCode::CONFLICT,
            ServiceError::NotFound(_) | ServiceError::ParentNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self.0 {
            ServiceError::Storage(detail) => {
                error!(code = self.0.code(), error = %detail, "storage failure");
                "internal storage error".to_string()
            }
            other => other.to_string(),
        };
        let body = serde_json::json!({"error": self.0.kind(), "code": self.0.code(), "message": msg});
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_kind_to_its_status() {
        let cases = [
            (ServiceError::already_exists("cid"), StatusCode::CONFLICT),
            (ServiceError::ReferenceNotFound { field: "locality_id" }, StatusCode::CONFLICT),
            (ServiceError::ProvinceNotFound("x".into()), StatusCode::CONFLICT),
            (ServiceError::not_found("seller"), StatusCode::NOT_FOUND),
            (ServiceError::parent_not_found("locality"), StatusCode::NOT_FOUND),
            (ServiceError::Validation("bad".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::storage("down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }
}
