use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Failure taxonomy shared by every workflow. Handlers return these and the
/// `ResponseError` impl maps them onto HTTP statuses, so precondition
/// checks read as plain early returns with `?`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/invalid fields, self-purchase, duplicate review or email.
    #[error("{0}")]
    Validation(String),
    /// Missing/invalid/expired token, or acting on a resource you don't own.
    #[error("{0}")]
    Unauthorized(String),
    /// Reviewing without a completed purchase.
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    /// Unexpected storage failure. Logged in full; clients get a generic body.
    #[error("database error: {0}")]
    Database(sea_orm::DbErr),
    /// Unexpected non-storage failure (hashing, token encoding, provider call).
    #[error("{0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Database(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Database(e) => {
                tracing::error!("storage failure: {e}");
                "Internal server error".to_string()
            }
            ApiError::Internal(detail) => {
                tracing::error!("internal failure: {detail}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn record_not_found_maps_to_404() {
        let err: ApiError = sea_orm::DbErr::RecordNotFound("Service not found".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
