mod actuator;
mod ground_station;
mod state;

pub use actuator::{Actuator, AntennaStatus, CommandStatus, ManualCommand, NullActuator};
pub use ground_station::GroundStation;
pub use state::{StateError, TrackingMode, TrackingState};
