use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::DashboardTemplate;

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    DashboardTemplate {
        satellite_id: state.config.tracking.default_satellite_id,
    }
}
