// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power usage response parsing.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use super::number::Number;
use crate::types::{DeviceDateTime, TimeParseError};

/// Response from `/calcRes`: the energy counter since the last reset.
///
/// The counter is in device-internal units; see [`crate::metrics::kwh`]
/// for the conversion.
///
/// # Examples
///
/// ```
/// use tesytalk::response::PowerUsageResponse;
///
/// let json = r#"{"sum":"1500","resetDate":"2018-08-12 19:00:00","watt":"2400"}"#;
/// let usage: PowerUsageResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(usage.counter, 1500);
/// assert_eq!(usage.watt_rating, 2400);
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PowerUsageResponse {
    /// Cumulative energy counter.
    #[serde(rename = "sum", default)]
    #[serde_as(as = "Number")]
    pub counter: u64,

    /// Rated power used to scale the counter, in watts.
    #[serde(rename = "watt", default)]
    #[serde_as(as = "Number")]
    pub watt_rating: u32,

    /// When the counter was last reset, `YYYY-MM-DD HH:MM:SS` device time.
    #[serde(rename = "resetDate", default)]
    #[serde_as(as = "DefaultOnNull")]
    pub reset_timestamp: String,
}

impl PowerUsageResponse {
    /// Returns the reset time, interpreted in the given zone.
    ///
    /// The zone has to come from the same status fetch the result is
    /// compared with.
    ///
    /// # Errors
    ///
    /// Returns `TimeParseError` if the timestamp or the zone is malformed.
    pub fn reset_time(&self, zone: &str) -> Result<DeviceDateTime, TimeParseError> {
        DeviceDateTime::parse(&self.reset_timestamp, zone)
    }
}
