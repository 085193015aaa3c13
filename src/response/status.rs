// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use super::number::{FiniteNumber, Number};
use crate::types::{DeviceDateTime, HeaterState, TimeParseError};

/// Response from `/status`.
///
/// # Examples
///
/// ```
/// use tesytalk::response::StatusResponse;
/// use tesytalk::types::HeaterState;
///
/// let json = r#"{
///     "heater_state": "READY",
///     "gradus": "61.0",
///     "ref_gradus": "70",
///     "volume": "80",
///     "watts": "2400",
///     "date": "2018-08-12 20:00",
///     "tz": "CEST"
/// }"#;
/// let response: StatusResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.heater_state, HeaterState::Ready);
/// assert!((response.current_temperature - 61.0).abs() < f64::EPSILON);
/// assert_eq!(response.tank_volume, 80);
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusResponse {
    /// What the heating element is doing.
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub heater_state: HeaterState,

    /// Current water temperature in degrees Celsius.
    #[serde(rename = "gradus", default)]
    #[serde_as(as = "FiniteNumber")]
    pub current_temperature: f64,

    /// Target water temperature in degrees Celsius.
    #[serde(rename = "ref_gradus", default)]
    #[serde_as(as = "FiniteNumber")]
    pub target_temperature: f64,

    /// Tank capacity in litres.
    #[serde(rename = "volume", default)]
    #[serde_as(as = "Number")]
    pub tank_volume: u32,

    /// Rated power of the heating element in watts.
    #[serde(rename = "watts", default)]
    #[serde_as(as = "Number")]
    pub power_watts: u32,

    /// Device clock, `YYYY-MM-DD HH:MM`.
    #[serde(rename = "date", default)]
    #[serde_as(as = "DefaultOnNull")]
    pub current_timestamp: String,

    /// Zone abbreviation for every timestamp the device reports.
    #[serde(rename = "tz", default)]
    #[serde_as(as = "DefaultOnNull")]
    pub timezone_abbreviation: String,
}

impl StatusResponse {
    /// Returns the device clock as a zoned timestamp.
    ///
    /// # Errors
    ///
    /// Returns `TimeParseError` if the clock or the zone is malformed.
    pub fn device_time(&self) -> Result<DeviceDateTime, TimeParseError> {
        DeviceDateTime::parse_minutes(&self.current_timestamp, &self.timezone_abbreviation)
    }
}
