// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Values derived from raw device readings.

use std::fmt;

use crate::response::{PowerUsageResponse, StatusResponse};
use crate::types::TimeParseError;

/// Counter units per kWh at a rating of one watt.
const COUNTER_UNITS_PER_WATT_KWH: f64 = 3_600_000.0;

/// Converts the energy counter to kilowatt-hours.
///
/// The division happens before the multiplication. Reordering them changes
/// the low bits of the result.
///
/// # Examples
///
/// ```
/// use tesytalk::metrics::kwh;
/// use tesytalk::response::PowerUsageResponse;
///
/// let usage = PowerUsageResponse { counter: 1500, watt_rating: 2400, ..Default::default() };
/// assert_eq!(kwh(&usage), 1.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn kwh(usage: &PowerUsageResponse) -> f64 {
    usage.counter as f64 / COUNTER_UNITS_PER_WATT_KWH * f64::from(usage.watt_rating)
}

/// Hours between the last counter reset and the device clock.
///
/// Both timestamps are read in the zone reported by `status`.
///
/// # Errors
///
/// Returns `TimeParseError` if either timestamp or the zone is malformed.
#[allow(clippy::cast_precision_loss)]
pub fn hours_since_reset(
    status: &StatusResponse,
    usage: &PowerUsageResponse,
) -> Result<f64, TimeParseError> {
    let reset = usage.reset_time(&status.timezone_abbreviation)?;
    let now = status.device_time()?;
    let elapsed = now.signed_duration_since(&reset);
    Ok(elapsed.num_seconds() as f64 / 3600.0)
}

/// Human-readable form of an elapsed number of hours.
///
/// # Examples
///
/// ```
/// use tesytalk::metrics::Elapsed;
///
/// assert_eq!(Elapsed(0.5).to_string(), "less than an hour");
/// assert_eq!(Elapsed(1.0).to_string(), "1.0 hours");
/// assert_eq!(Elapsed(24.0).to_string(), "24.0 hours");
/// assert_eq!(Elapsed(36.0).to_string(), "1.5 days (36.0 hours)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Elapsed(pub f64);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0;
        if hours < 1.0 {
            f.write_str("less than an hour")
        } else if hours > 24.0 {
            write!(f, "{:.1} days ({hours:.1} hours)", hours / 24.0)
        } else {
            write!(f, "{hours:.1} hours")
        }
    }
}
