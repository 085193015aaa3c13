// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device timestamps.
//!
//! The heater reports its clock as local wall time plus a separate zone
//! abbreviation (`"tz": "CEST"`). Timestamps are combined with that
//! abbreviation and parsed with one fixed layout:
//!
//! ```text
//! YYYY-MM-DD HH:MM:SS ZONE
//! ```
//!
//! # Zone abbreviations
//!
//! The zone must look like a zone abbreviation, otherwise parsing fails:
//!
//! - three upper-case letters (`UTC`, `EET`, `PST`)
//! - four upper-case letters ending in `T` (`CEST`, `AEST`), or `WITA`
//! - five upper-case letters ending in `T` (`ACDT`-style long forms)
//! - `ChST` and `MeST`
//! - `GMT` optionally followed by a signed hour offset (`GMT+3`)
//! - a bare signed hour offset (`+03`, `-7`)
//!
//! Only `UTC`, `GMT` and explicit offsets carry a known offset. Any other
//! abbreviation is recorded with a zero offset, so two timestamps with the
//! same abbreviation always differ by exactly their wall-clock difference.
//!
//! # Examples
//!
//! ```
//! use tesytalk::types::DeviceDateTime;
//!
//! let reset = DeviceDateTime::parse("2018-08-12 19:00:00", "CEST").unwrap();
//! let now = DeviceDateTime::parse_minutes("2018-08-12 20:00", "CEST").unwrap();
//! assert_eq!(now.signed_duration_since(&reset).num_minutes(), 60);
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// The fixed layout for the wall-clock part of a device timestamp.
const LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Error returned when a device timestamp or its zone cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError {
    input: String,
    reason: &'static str,
}

impl TimeParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// Returns the input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse device time '{}': {} (expected 'YYYY-MM-DD HH:MM:SS ZONE')",
            self.input, self.reason
        )
    }
}

impl std::error::Error for TimeParseError {}

/// A device wall-clock time paired with its zone abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDateTime {
    naive: NaiveDateTime,
    zone: String,
    offset_secs: i32,
}

impl DeviceDateTime {
    /// Parses a second-precision timestamp (`"2018-08-12 19:00:00"`).
    ///
    /// # Errors
    ///
    /// Returns `TimeParseError` if the timestamp does not match the layout
    /// or the zone is not a recognizable abbreviation.
    pub fn parse(timestamp: &str, zone: &str) -> Result<Self, TimeParseError> {
        let input = format!("{timestamp} {zone}");

        let offset_secs = zone_offset(zone)
            .ok_or_else(|| TimeParseError::new(&input, "unrecognized zone abbreviation"))?;
        let naive = NaiveDateTime::parse_from_str(timestamp, LAYOUT)
            .map_err(|_| TimeParseError::new(&input, "malformed timestamp"))?;

        Ok(Self {
            naive,
            zone: zone.to_string(),
            offset_secs,
        })
    }

    /// Parses a minute-precision timestamp (`"2018-08-12 20:00"`).
    ///
    /// Seconds are taken to be `:00`.
    ///
    /// # Errors
    ///
    /// Same as [`DeviceDateTime::parse`].
    pub fn parse_minutes(timestamp: &str, zone: &str) -> Result<Self, TimeParseError> {
        Self::parse(&format!("{timestamp}:00"), zone)
    }

    /// Returns the wall-clock time as shown on the device.
    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// Returns the zone abbreviation.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Returns the absolute instant this timestamp denotes.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        (self.naive - TimeDelta::seconds(i64::from(self.offset_secs))).and_utc()
    }

    /// Returns `self - earlier` as a signed duration.
    #[must_use]
    pub fn signed_duration_since(&self, earlier: &Self) -> TimeDelta {
        self.to_utc().signed_duration_since(earlier.to_utc())
    }
}

impl fmt::Display for DeviceDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.naive.format(LAYOUT), self.zone)
    }
}

/// Validates a zone abbreviation and returns its offset east of UTC.
fn zone_offset(zone: &str) -> Option<i32> {
    if zone == "ChST" || zone == "MeST" {
        return Some(0);
    }
    if let Some(rest) = zone.strip_prefix("GMT") {
        return if rest.is_empty() {
            Some(0)
        } else {
            signed_hours(rest)
        };
    }
    if zone.starts_with(['+', '-']) {
        return signed_hours(zone);
    }

    if !zone.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    match zone.len() {
        3 => Some(0),
        4 if zone.ends_with('T') || zone == "WITA" => Some(0),
        5 if zone.ends_with('T') => Some(0),
        _ => None,
    }
}

/// Parses `+H`, `-HH` and friends into seconds, up to 24 hours.
fn signed_hours(s: &str) -> Option<i32> {
    let (sign, digits) = match s.split_at_checked(1)? {
        ("+", digits) => (1, digits),
        ("-", digits) => (-1, digits),
        _ => return None,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits.parse().ok()?;
    (hours <= 24).then_some(sign * hours * 3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_second_precision() {
        let dt = DeviceDateTime::parse("2018-08-12 19:00:05", "CEST").unwrap();
        assert_eq!(dt.naive().year(), 2018);
        assert_eq!(dt.naive().hour(), 19);
        assert_eq!(dt.naive().second(), 5);
        assert_eq!(dt.zone(), "CEST");
    }

    #[test]
    fn parse_minute_precision_assumes_zero_seconds() {
        let dt = DeviceDateTime::parse_minutes("2018-08-12 20:07", "CEST").unwrap();
        assert_eq!(dt.naive().minute(), 7);
        assert_eq!(dt.naive().second(), 0);
    }

    #[test]
    fn minute_precision_rejects_seconds() {
        assert!(DeviceDateTime::parse_minutes("2018-08-12 20:07:00", "CEST").is_err());
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(DeviceDateTime::parse("", "CEST").is_err());
        assert!(DeviceDateTime::parse("2018-08-12", "CEST").is_err());
        assert!(DeviceDateTime::parse("2018-13-12 19:00:00", "CEST").is_err());
        assert!(DeviceDateTime::parse("2018-08-12T19:00:00", "CEST").is_err());
    }

    #[test]
    fn accepted_zone_abbreviations() {
        for zone in [
            "UTC", "CET", "CEST", "EEST", "WITA", "ChST", "MeST", "GMT", "GMT+3", "GMT-11", "+03",
            "-7",
        ] {
            assert!(
                DeviceDateTime::parse("2018-08-12 19:00:00", zone).is_ok(),
                "{zone} should be accepted"
            );
        }
    }

    #[test]
    fn rejected_zone_abbreviations() {
        for zone in ["", "C", "CE", "cest", "CESX", "ABCDE", "ABCDEF", "GMT+25", "+", "Europe/Sofia"] {
            let err = DeviceDateTime::parse("2018-08-12 19:00:00", zone).unwrap_err();
            assert!(err.to_string().contains("zone"), "{zone} should be rejected");
        }
    }

    #[test]
    fn same_zone_difference_is_wall_clock_difference() {
        let reset = DeviceDateTime::parse("2018-08-12 19:00:00", "CEST").unwrap();
        let now = DeviceDateTime::parse_minutes("2018-08-12 20:00", "CEST").unwrap();
        assert_eq!(now.signed_duration_since(&reset), TimeDelta::hours(1));
    }

    #[test]
    fn explicit_offsets_shift_the_instant() {
        let utc = DeviceDateTime::parse("2018-08-12 12:00:00", "UTC").unwrap();
        let plus_two = DeviceDateTime::parse("2018-08-12 14:00:00", "GMT+2").unwrap();
        assert_eq!(utc.to_utc(), plus_two.to_utc());
    }

    #[test]
    fn display_round_trips_layout() {
        let dt = DeviceDateTime::parse_minutes("2018-08-12 20:00", "CEST").unwrap();
        assert_eq!(dt.to_string(), "2018-08-12 20:00:00 CEST");
    }

    #[test]
    fn error_keeps_input() {
        let err = DeviceDateTime::parse("garbage", "CEST").unwrap_err();
        assert_eq!(err.input(), "garbage CEST");
    }
}
