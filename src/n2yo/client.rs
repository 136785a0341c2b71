use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;

use super::error::N2yoError;
use super::types::{PositionSample, PositionsResponse};
use crate::station::GroundStation;

pub const DEFAULT_BASE_URL: &str = "https://api.n2yo.com/rest/v1/satellite";

// N2YO enforces ~1000 requests/hour per key. Not enforced locally.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the N2YO REST API. Cheap to clone; the inner reqwest
/// client is shared.
#[derive(Clone)]
pub struct N2yoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl N2yoClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, N2yoError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    // N2YO appends the key after the trailing path slash, not as a
    // regular query string.
    fn positions_url(&self, satellite_id: u32, station: &GroundStation, seconds: u32) -> String {
        format!(
            "{}/positions/{}/{}/{}/{}/{}/&apiKey={}",
            self.base_url,
            satellite_id,
            station.latitude_deg,
            station.longitude_deg,
            station.altitude_m,
            seconds,
            self.api_key
        )
    }

    fn above_url(&self, station: &GroundStation, radius_deg: u32, category_id: u32) -> String {
        format!(
            "{}/above/{}/{}/{}/{}/{}/&apiKey={}",
            self.base_url,
            station.latitude_deg,
            station.longitude_deg,
            station.altitude_m,
            radius_deg,
            category_id,
            self.api_key
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, N2yoError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(N2yoError::Status { status, message });
        }
        Ok(response.json().await?)
    }

    /// Current look angles for a satellite, as seen from the station.
    pub async fn fetch_position(
        &self,
        satellite_id: u32,
        station: &GroundStation,
    ) -> Result<PositionSample, N2yoError> {
        let url = self.positions_url(satellite_id, station, 1);
        let body: PositionsResponse = self.get_json(&url).await?;
        body.positions
            .first()
            .copied()
            .ok_or(N2yoError::NoPositions)
    }

    /// Objects currently above the station within `radius_deg` of zenith.
    /// The payload is passed through unmodified (`info.satcount`,
    /// `above[]`).
    pub async fn fetch_above(
        &self,
        station: &GroundStation,
        radius_deg: u32,
        category_id: u32,
    ) -> Result<serde_json::Value, N2yoError> {
        let url = self.above_url(station, radius_deg, category_id);
        self.get_json(&url).await
    }

    /// Best-effort guess at how long the satellite stays above the
    /// horizon, scanning a `window_s`-second position sequence. Upstream
    /// failures are swallowed; `None` means unknown, not an error.
    pub async fn estimate_visibility(
        &self,
        satellite_id: u32,
        station: &GroundStation,
        window_s: u32,
    ) -> Option<i64> {
        let url = self.positions_url(satellite_id, station, window_s);
        let body: PositionsResponse = match self.get_json(&url).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("visibility lookup for {} failed: {}", satellite_id, e);
                return None;
            }
        };
        Some(visible_seconds(&body.positions, Utc::now().timestamp()))
    }
}

/// Remaining above-horizon seconds judged from a position sequence:
/// timestamp of the latest sample with elevation > 0 minus `now`,
/// clamped at zero. Accuracy is bounded by the window's sample density.
pub(crate) fn visible_seconds(samples: &[PositionSample], now: i64) -> i64 {
    samples
        .iter()
        .filter(|s| s.elevation > 0.0)
        .map(|s| s.timestamp)
        .max()
        .map(|t| (t - now).max(0))
        .unwrap_or(0)
}
