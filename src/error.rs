use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. Mapped to HTTP at the API boundary;
/// nothing here is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NoData(String),

    #[error("{0}")]
    InsufficientData(String),

    #[error("forecast service rejected the request with status {status}")]
    UpstreamRejected { status: u16, body: String },

    #[error("forecast service unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "Message": msg })),
            ApiError::Conflict(msg) | ApiError::NoData(msg) | ApiError::InsufficientData(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "Message": msg }))
            }
            ApiError::UpstreamRejected { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({
                    "Message": "Forecast service rejected the request",
                    "Details": body,
                }),
            ),
            ApiError::UpstreamUnreachable(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "Message": "Failed to connect to forecast service",
                    "Error": err,
                }),
            ),
            ApiError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "Message": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_bad_request() {
        let res = ApiError::Conflict("already submitted".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_history_maps_to_bad_request() {
        let res = ApiError::NoData("no data".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let res = ApiError::InsufficientData("need more".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let res = ApiError::Unauthorized("missing header".into()).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn upstream_rejection_relays_status() {
        let res = ApiError::UpstreamRejected {
            status: 503,
            body: "{\"error\":\"model down\"}".into(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn bogus_upstream_status_falls_back_to_bad_gateway() {
        let res = ApiError::UpstreamRejected {
            status: 23,
            body: String::new(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unreachable_upstream_maps_to_500() {
        let res = ApiError::UpstreamUnreachable("connection refused".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
