use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecoclean_shared::Error;
use serde_json::json;

/// Request-boundary error: every failure becomes a status code plus a
/// `{"msg": ...}` body. Internal details are logged, never returned.
#[derive(Debug)]
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(value: Error) -> Self {
        Self(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            Error::Validate(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
            Error::User(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // Duplicates have always been reported as 400
            Error::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Error::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Server(msg) => {
                tracing::error!("Server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Unknown(e) => {
                tracing::error!("Unexpected error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        AppError(err).into_response().status()
    }

    #[test]
    fn maps_domain_errors_to_status_codes() {
        assert_eq!(status_of(Error::User("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(Error::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(status_of(Error::Conflict("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(Error::Unauthorized("x".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(Error::Upstream("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(Error::Unknown(anyhow::anyhow!("disk on fire"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn hides_internal_details() {
        let response = AppError(Error::Unknown(anyhow::anyhow!("disk on fire"))).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(!body.contains("disk on fire"));
        assert!(body.contains("Internal server error"));
    }
}
