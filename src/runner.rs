// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One invocation of the command-line tool: pick an action, run it.

use crate::device::Device;
use crate::error::{Error, ValueError};
use crate::protocol::Protocol;
use crate::report::Report;
use crate::types::Temperature;

/// What the user asked for.
///
/// Exactly one action runs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reset the energy counter.
    ResetPowerCounter,
    /// Set a new target temperature.
    SetTemperature(Temperature),
    /// Print the status report, with device identity when `verbose`.
    Status {
        /// Also fetch and print device identity.
        verbose: bool,
    },
}

impl Action {
    /// Picks the action from command-line flags.
    ///
    /// A reset takes precedence over a temperature change, which takes
    /// precedence over the status query.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if a temperature outside 1-70 was
    /// requested and no reset was.
    ///
    /// # Examples
    ///
    /// ```
    /// use tesytalk::runner::Action;
    ///
    /// assert_eq!(
    ///     Action::from_flags(false, None, true).unwrap(),
    ///     Action::Status { verbose: true }
    /// );
    /// assert_eq!(Action::from_flags(true, Some(99), false).unwrap(), Action::ResetPowerCounter);
    /// assert!(Action::from_flags(false, Some(71), false).is_err());
    /// ```
    pub fn from_flags(
        reset_power: bool,
        set_temperature: Option<i64>,
        verbose: bool,
    ) -> Result<Self, ValueError> {
        if reset_power {
            return Ok(Self::ResetPowerCounter);
        }
        match set_temperature {
            Some(value) => Ok(Self::SetTemperature(Temperature::new(value)?)),
            None => Ok(Self::Status { verbose }),
        }
    }

    /// Line to print before the action starts, if any.
    #[must_use]
    pub const fn progress_message(&self) -> Option<&'static str> {
        match self {
            Self::ResetPowerCounter => Some("Resetting kWh calculator.."),
            Self::SetTemperature(_) => Some("Setting temperature.."),
            Self::Status { .. } => None,
        }
    }

    /// Describes the action for error messages.
    #[must_use]
    pub fn failure_context(&self) -> String {
        match self {
            Self::ResetPowerCounter => "Failed to reset kWh calculator".to_string(),
            Self::SetTemperature(temperature) => {
                format!("Failed to set temperature to {temperature}")
            }
            Self::Status { .. } => "Failed to retrieve status for your tesy device".to_string(),
        }
    }
}

/// Result of a successful action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A command was acknowledged.
    Done,
    /// A status report is ready to print.
    Report(Report),
}

/// Runs an action against a device.
///
/// # Errors
///
/// Returns the first error hit; nothing after it is attempted.
pub async fn run<P: Protocol>(device: &Device<P>, action: Action) -> Result<Outcome, Error> {
    tracing::debug!(?action, "Running action");

    match action {
        Action::ResetPowerCounter => {
            device.reset_power_counter().await?;
            Ok(Outcome::Done)
        }
        Action::SetTemperature(temperature) => {
            device.set_temperature(temperature).await?;
            Ok(Outcome::Done)
        }
        Action::Status { verbose } => Ok(Outcome::Report(device.report(verbose).await?)),
    }
}
