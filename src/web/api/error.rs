use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::n2yo::N2yoError;

pub enum ApiError {
    Validation(String),
    Upstream(N2yoError),
}

impl From<N2yoError> for ApiError {
    fn from(e: N2yoError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::with_message("validation_failed", &msg)),
            )
                .into_response(),
            ApiError::Upstream(e) => {
                let status = upstream_status(&e);
                (
                    status,
                    Json(ErrorResponse::with_message("upstream_error", &e.to_string())),
                )
                    .into_response()
            }
        }
    }
}

// Provider-reported status codes pass through; everything else the
// upstream can do wrong is a bad gateway.
fn upstream_status(e: &N2yoError) -> StatusCode {
    match e {
        N2yoError::Status { status, .. } => {
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        N2yoError::NoPositions | N2yoError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422() {
        let response = ApiError::Validation("satellite id must be a positive integer".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn provider_status_passes_through() {
        let err = N2yoError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            message: "no such satellite".into(),
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn empty_positions_map_to_bad_gateway() {
        let response = ApiError::from(N2yoError::NoPositions).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
