use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::n2yo::PositionSample;
use crate::station::{AntennaStatus, TrackingMode};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub mode: TrackingMode,
    pub satellite_id: u32,
    pub position: PositionSample,
    pub signal: Option<f64>,
    pub visibility_seconds: Option<i64>,
    pub antenna: Option<AntennaStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Tracking snapshot", body = StatusResponse),
        (status = 502, description = "Upstream failure", body = ErrorResponse)
    ),
    tag = "tracking"
)]
pub async fn get_status(State(state): State<AppState>) -> ApiResult<Json<StatusResponse>> {
    // Snapshot the record before going to the network; the lock is never
    // held across an upstream call.
    let (mode, satellite_id, signal) = {
        let tracking = state.tracking.lock().await;
        (tracking.mode(), tracking.satellite_id(), tracking.signal_dbm())
    };

    let position = state
        .n2yo
        .fetch_position(satellite_id, &state.config.station)
        .await?;
    let visibility_seconds = state
        .n2yo
        .estimate_visibility(
            satellite_id,
            &state.config.station,
            state.config.tracking.visibility_window_s,
        )
        .await;

    Ok(Json(StatusResponse {
        mode,
        satellite_id,
        position,
        signal,
        visibility_seconds,
        antenna: state.actuator.status(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/ping",
    responses(
        (status = 200, description = "Liveness probe", body = PingResponse)
    ),
    tag = "tracking"
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_always_answers_ok() {
        let Json(response) = ping().await;
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn status_serializes_placeholders_as_null() {
        let response = StatusResponse {
            mode: TrackingMode::Geo,
            satellite_id: 25544,
            position: PositionSample {
                azimuth: 254.31,
                elevation: 10.0,
                timestamp: 1521354418,
            },
            signal: None,
            visibility_seconds: Some(120),
            antenna: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mode"], "geo");
        assert_eq!(json["signal"], serde_json::Value::Null);
        assert_eq!(json["antenna"], serde_json::Value::Null);
        assert_eq!(json["visibility_seconds"], 120);
        assert_eq!(json["position"]["elevation"], 10.0);
    }
}
