use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AboveQuery {
    /// Search radius in degrees from zenith; falls back to the
    /// configured default.
    #[serde(default)]
    pub radius: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/above",
    params(
        ("radius" = Option<u32>, Query, description = "Search radius in degrees (0-90)")
    ),
    responses(
        (status = 200, description = "Raw N2YO above payload (info.satcount, above[])"),
        (status = 502, description = "Upstream failure", body = ErrorResponse)
    ),
    tag = "tracking"
)]
pub async fn get_above(
    State(state): State<AppState>,
    Query(query): Query<AboveQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let radius = query.radius.unwrap_or(state.config.tracking.above_radius_deg);
    let payload = state
        .n2yo
        .fetch_above(
            &state.config.station,
            radius,
            state.config.tracking.above_category_id,
        )
        .await?;
    Ok(Json(payload))
}
