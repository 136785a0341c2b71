use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("satellite id must be a positive integer")]
    InvalidSatelliteId,
}

/// Antenna pointing mode. `geo` holds a geostationary bearing, `polar`
/// follows a moving target, `manual` hands the mount to jog commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrackingMode {
    Geo,
    Polar,
    Manual,
}

/// Process-wide tracking record. One instance lives in the shared app
/// state behind a mutex; all mutation goes through the setters so a
/// different guard can be swapped in later without touching handlers.
#[derive(Debug, Clone)]
pub struct TrackingState {
    mode: TrackingMode,
    satellite_id: u32,
    // RSSI placeholder, populated once the receiver reports one.
    signal_dbm: Option<f64>,
}

impl TrackingState {
    pub fn new(satellite_id: u32) -> Self {
        Self {
            mode: TrackingMode::Geo,
            satellite_id,
            signal_dbm: None,
        }
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn satellite_id(&self) -> u32 {
        self.satellite_id
    }

    pub fn signal_dbm(&self) -> Option<f64> {
        self.signal_dbm
    }

    pub fn set_mode(&mut self, mode: TrackingMode) {
        self.mode = mode;
    }

    /// Any mode may be set from any other; the target just has to be a
    /// real NORAD id.
    pub fn set_target(&mut self, satellite_id: u32) -> Result<(), StateError> {
        if satellite_id == 0 {
            return Err(StateError::InvalidSatelliteId);
        }
        self.satellite_id = satellite_id;
        Ok(())
    }
}
