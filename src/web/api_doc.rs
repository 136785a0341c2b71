use utoipa::OpenApi;

use crate::n2yo::PositionSample;
use crate::station::{AntennaStatus, CommandStatus, ManualCommand, TrackingMode};

use super::api::above::AboveQuery;
use super::api::control::{
    ManualRequest, ManualResponse, ModeRequest, ModeResponse, TargetRequest, TargetResponse,
};
use super::api::error::ErrorResponse;
use super::api::status::{PingResponse, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::status::get_status,
        super::api::status::ping,
        super::api::above::get_above,
        super::api::control::set_mode,
        super::api::control::set_target,
        super::api::control::manual_command,
    ),
    components(
        schemas(
            StatusResponse,
            PingResponse,
            AboveQuery,
            ModeRequest,
            ModeResponse,
            TargetRequest,
            TargetResponse,
            ManualRequest,
            ManualResponse,
            ErrorResponse,
            PositionSample,
            TrackingMode,
            ManualCommand,
            CommandStatus,
            AntennaStatus,
        )
    ),
    info(
        title = "Groundlink API",
        description = "HTTP gateway for satellite tracking and antenna control",
        version = "0.1.0"
    ),
    tags(
        (name = "tracking", description = "Tracking state and N2YO lookups"),
        (name = "control", description = "Mode, target and manual antenna commands")
    )
)]
pub struct ApiDoc;
