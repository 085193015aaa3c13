// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status report assembled from one round of queries.

use std::fmt;

use crate::metrics::{self, Elapsed};
use crate::response::{DeviceInfoResponse, PowerUsageResponse, StatusResponse};
use crate::types::TimeParseError;

/// Everything shown by a status query.
///
/// Built only once every fetch has succeeded, so a report is never partial.
/// The [`Display`](fmt::Display) impl renders the terminal output; device
/// identity lines appear only when identity was fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    status: StatusResponse,
    usage: PowerUsageResponse,
    identity: Option<DeviceInfoResponse>,
    kwh: f64,
    hours_since_reset: f64,
}

impl Report {
    /// Computes derived values and builds the report.
    ///
    /// # Errors
    ///
    /// Returns `TimeParseError` if the reset time or the device clock cannot
    /// be interpreted.
    pub fn new(
        status: StatusResponse,
        usage: PowerUsageResponse,
        identity: Option<DeviceInfoResponse>,
    ) -> Result<Self, TimeParseError> {
        let hours_since_reset = metrics::hours_since_reset(&status, &usage)?;
        let kwh = metrics::kwh(&usage);
        Ok(Self {
            status,
            usage,
            identity,
            kwh,
            hours_since_reset,
        })
    }

    /// Returns the status part.
    #[must_use]
    pub fn status(&self) -> &StatusResponse {
        &self.status
    }

    /// Returns the power usage part.
    #[must_use]
    pub fn usage(&self) -> &PowerUsageResponse {
        &self.usage
    }

    /// Returns the device identity, if it was fetched.
    #[must_use]
    pub fn identity(&self) -> Option<&DeviceInfoResponse> {
        self.identity.as_ref()
    }

    /// Energy used since the last reset, in kWh.
    #[must_use]
    pub fn kwh(&self) -> f64 {
        self.kwh
    }

    /// Hours since the last reset.
    #[must_use]
    pub fn hours_since_reset(&self) -> f64 {
        self.hours_since_reset
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heater state:        {}", self.status.heater_state)?;
        writeln!(
            f,
            "Current temperature: {:.1}\u{2103}/{:.1}\u{2103}",
            self.status.current_temperature, self.status.target_temperature
        )?;
        writeln!(
            f,
            "Power usage:         {:.2} kWh since last reset ({} ago)",
            self.kwh,
            Elapsed(self.hours_since_reset)
        )?;

        if let Some(identity) = &self.identity {
            writeln!(f, "Heater capacity:     {} litres", self.status.tank_volume)?;
            writeln!(f, "DevID:               {}", identity.device_id)?;
            writeln!(f, "MacAddr:             {}", identity.mac_address)?;
            writeln!(f, "Watts:               {}", self.status.power_watts)?;
        }
        Ok(())
    }
}
