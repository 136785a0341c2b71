use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::station::{CommandStatus, ManualCommand, TrackingMode};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModeRequest {
    pub mode: TrackingMode,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModeResponse {
    pub mode: TrackingMode,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TargetRequest {
    pub satellite_id: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TargetResponse {
    pub satellite_id: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ManualRequest {
    pub command: ManualCommand,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ManualResponse {
    pub command: ManualCommand,
    pub status: CommandStatus,
}

#[utoipa::path(
    post,
    path = "/api/mode",
    request_body = ModeRequest,
    responses(
        (status = 200, description = "Mode changed", body = ModeResponse),
        (status = 422, description = "Unknown mode", body = ErrorResponse)
    ),
    tag = "control"
)]
pub async fn set_mode(
    State(state): State<AppState>,
    Json(request): Json<ModeRequest>,
) -> Json<ModeResponse> {
    let mut tracking = state.tracking.lock().await;
    tracking.set_mode(request.mode);
    log::info!("tracking mode set to {}", request.mode);
    Json(ModeResponse {
        mode: tracking.mode(),
    })
}

#[utoipa::path(
    post,
    path = "/api/target",
    request_body = TargetRequest,
    responses(
        (status = 200, description = "Target changed", body = TargetResponse),
        (status = 422, description = "Invalid satellite id", body = ErrorResponse)
    ),
    tag = "control"
)]
pub async fn set_target(
    State(state): State<AppState>,
    Json(request): Json<TargetRequest>,
) -> ApiResult<Json<TargetResponse>> {
    let mut tracking = state.tracking.lock().await;
    tracking
        .set_target(request.satellite_id)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    log::info!("tracking target set to {}", request.satellite_id);
    Ok(Json(TargetResponse {
        satellite_id: tracking.satellite_id(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/manual",
    request_body = ManualRequest,
    responses(
        (status = 200, description = "Command queued", body = ManualResponse),
        (status = 422, description = "Unknown command", body = ErrorResponse)
    ),
    tag = "control"
)]
pub async fn manual_command(
    State(state): State<AppState>,
    Json(request): Json<ManualRequest>,
) -> Json<ManualResponse> {
    let status = state.actuator.enqueue(request.command);
    Json(ManualResponse {
        command: request.command,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // axum's Json extractor turns these deserialization failures into
    // 422 responses before the handlers run.
    #[test]
    fn unknown_mode_fails_deserialization() {
        assert!(serde_json::from_str::<ModeRequest>(r#"{"mode": "tumble"}"#).is_err());
        let ok: ModeRequest = serde_json::from_str(r#"{"mode": "polar"}"#).unwrap();
        assert_eq!(ok.mode, TrackingMode::Polar);
    }

    #[test]
    fn non_integer_target_fails_deserialization() {
        assert!(serde_json::from_str::<TargetRequest>(r#"{"satellite_id": -5}"#).is_err());
        assert!(serde_json::from_str::<TargetRequest>(r#"{"satellite_id": 1.5}"#).is_err());
        let ok: TargetRequest = serde_json::from_str(r#"{"satellite_id": 25544}"#).unwrap();
        assert_eq!(ok.satellite_id, 25544);
    }

    #[test]
    fn unknown_command_fails_deserialization() {
        assert!(serde_json::from_str::<ManualRequest>(r#"{"command": "spin"}"#).is_err());
        let ok: ManualRequest = serde_json::from_str(r#"{"command": "stop"}"#).unwrap();
        assert_eq!(ok.command, ManualCommand::Stop);
    }

    #[test]
    fn manual_response_echoes_the_command() {
        let response = ManualResponse {
            command: ManualCommand::Up,
            status: CommandStatus::Queued,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["command"], "up");
        assert_eq!(json["status"], "queued");
    }
}
