use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// Jog command vocabulary for the antenna mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ManualCommand {
    Up,
    Down,
    Left,
    Right,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Queued,
}

/// Mount status as a hardware-backed actuator would report it.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct AntennaStatus {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub moving: bool,
}

/// Hardware seam for the antenna mount. The HTTP layer depends on this
/// trait only, so a serial-backed rotator can replace the placeholder
/// without touching the handlers.
pub trait Actuator: Send + Sync {
    /// Queue a jog command for execution.
    fn enqueue(&self, command: ManualCommand) -> CommandStatus;

    /// Current mount status, if the hardware reports one.
    fn status(&self) -> Option<AntennaStatus>;
}

/// Stand-in until the rotator serial link is wired up: accepts every
/// command, moves nothing, reports nothing.
pub struct NullActuator;

impl Actuator for NullActuator {
    fn enqueue(&self, command: ManualCommand) -> CommandStatus {
        log::info!("manual command queued, no hardware attached: {}", command);
        CommandStatus::Queued
    }

    fn status(&self) -> Option<AntennaStatus> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_actuator_queues_every_command() {
        let actuator = NullActuator;
        for command in [
            ManualCommand::Up,
            ManualCommand::Down,
            ManualCommand::Left,
            ManualCommand::Right,
            ManualCommand::Stop,
        ] {
            assert_eq!(actuator.enqueue(command), CommandStatus::Queued);
        }
    }

    #[test]
    fn null_actuator_reports_no_antenna() {
        assert!(NullActuator.status().is_none());
    }

    #[test]
    fn command_wire_names_match_the_api() {
        assert_eq!(serde_json::to_string(&ManualCommand::Stop).unwrap(), "\"stop\"");
        assert_eq!(
            serde_json::from_str::<ManualCommand>("\"left\"").unwrap(),
            ManualCommand::Left
        );
        assert!(serde_json::from_str::<ManualCommand>("\"warp\"").is_err());
        assert_eq!(serde_json::to_string(&CommandStatus::Queued).unwrap(), "\"queued\"");
    }
}
