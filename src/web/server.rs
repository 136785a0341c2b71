use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::n2yo::{N2yoClient, N2yoError};
use crate::station::{Actuator, NullActuator, TrackingState};

use super::api::{above, control, status};
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("upstream client error: {0}")]
    Client(#[from] N2yoError),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tracking: Arc<Mutex<TrackingState>>,
    pub n2yo: N2yoClient,
    pub actuator: Arc<dyn Actuator>,
}

pub async fn run_server(config: Config) -> Result<(), ServeError> {
    let bind_addr = config.web.bind.clone();
    let n2yo = N2yoClient::new(config.n2yo.api_key.clone(), config.n2yo.base_url.clone())?;
    let tracking = TrackingState::new(config.tracking.default_satellite_id);

    let state = AppState {
        config: Arc::new(config),
        tracking: Arc::new(Mutex::new(tracking)),
        n2yo,
        actuator: Arc::new(NullActuator),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        // Tracking API endpoints
        .route("/api/status", get(status::get_status))
        .route("/api/ping", get(status::ping))
        .route("/api/above", get(above::get_above))
        // Control API endpoints
        .route("/api/mode", post(control::set_mode))
        .route("/api/target", post(control::set_target))
        .route("/api/manual", post(control::manual_command))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
