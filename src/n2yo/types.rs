use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single look-angle sample from the positions endpoint. The upstream
/// payload carries more fields (sub-satellite point, RA/dec); only the
/// ones the station needs are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PositionSample {
    pub azimuth: f64,
    pub elevation: f64,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PositionsResponse {
    #[serde(default)]
    pub positions: Vec<PositionSample>,
}
