// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for the water heater.
//!
//! [`Device`] turns commands into typed responses and device refusals into
//! errors. Every call is a single request; nothing is cached between calls.
//!
//! ```no_run
//! use tesytalk::Device;
//! use tesytalk::types::Temperature;
//!
//! # async fn example() -> tesytalk::Result<()> {
//! let device = Device::http("10.0.1.1")?;
//!
//! device.set_temperature(Temperature::new(60)?).await?;
//! let report = device.report(false).await?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```

use crate::command::{Command, ResetPowerCommand, SetTemperatureCommand, StatusCommand};
use crate::error::{DeviceError, Error};
use crate::protocol::{CommandResponse, HttpClient, HttpConfig, Protocol};
use crate::report::Report;
use crate::response::{
    DeviceInfoResponse, PowerUsageResponse, ResetPowerResponse, SetTemperatureResponse,
    StatusResponse,
};
use crate::types::Temperature;

/// A water heater reachable through some [`Protocol`].
#[derive(Debug)]
pub struct Device<P: Protocol> {
    protocol: P,
}

impl Device<HttpClient> {
    /// Creates an HTTP device for the given address with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid.
    pub fn http(address: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(HttpConfig::new(address))
    }

    /// Creates an HTTP device from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid.
    pub fn from_config(config: HttpConfig) -> Result<Self, Error> {
        Ok(Self::new(config.into_client()?))
    }
}

impl<P: Protocol> Device<P> {
    /// Creates a new device on top of the given protocol.
    #[must_use]
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Returns the underlying protocol.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Sends a command to the device.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, Error> {
        if command.is_mutating() {
            tracing::info!(path = command.path(), "Changing device state");
        }
        self.protocol
            .send_command(command)
            .await
            .map_err(Error::Protocol)
    }

    async fn query<T: serde::de::DeserializeOwned>(
        &self,
        command: StatusCommand,
    ) -> Result<T, Error> {
        let response = self.send_command(&command).await?;
        Ok(response.parse()?)
    }

    // ========== Queries ==========

    /// Fetches heater state, temperatures and the device clock.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn status(&self) -> Result<StatusResponse, Error> {
        self.query(StatusCommand::Status).await
    }

    /// Fetches device ID and MAC address.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn device_info(&self) -> Result<DeviceInfoResponse, Error> {
        self.query(StatusCommand::DeviceInfo).await
    }

    /// Fetches the energy counter.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn power_usage(&self) -> Result<PowerUsageResponse, Error> {
        self.query(StatusCommand::PowerUsage).await
    }

    /// Fetches everything needed for a status report, in order: identity
    /// (only when `verbose`), status, power usage.
    ///
    /// The first failure aborts the sequence.
    ///
    /// # Errors
    ///
    /// Returns error if any request fails, any response cannot be parsed, or
    /// the device timestamps cannot be interpreted.
    pub async fn report(&self, verbose: bool) -> Result<Report, Error> {
        let identity = if verbose {
            Some(self.device_info().await?)
        } else {
            None
        };
        let status = self.status().await?;
        let usage = self.power_usage().await?;

        Ok(Report::new(status, usage, identity)?)
    }

    // ========== Commands ==========

    /// Resets the energy counter.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::CommandRejected` if the device reports a non-zero
    /// error code, or any transport or parse error.
    pub async fn reset_power_counter(&self) -> Result<ResetPowerResponse, Error> {
        let response = self.send_command(&ResetPowerCommand).await?;
        let ack: ResetPowerResponse = response.parse()?;
        if !ack.is_ok() {
            tracing::warn!(err = ack.err, "Device refused to reset energy counter");
            return Err(DeviceError::CommandRejected {
                reason: "failed to reset power calculator".to_string(),
                body: response.body().to_string(),
            }
            .into());
        }
        Ok(ack)
    }

    /// Sets the target temperature.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::CommandRejected` unless the device answers
    /// `"ok"`, or any transport or parse error.
    pub async fn set_temperature(
        &self,
        temperature: Temperature,
    ) -> Result<SetTemperatureResponse, Error> {
        tracing::debug!(temperature = temperature.value(), "Setting temperature");

        let response = self
            .send_command(&SetTemperatureCommand::new(temperature))
            .await?;
        let ack: SetTemperatureResponse = response.parse()?;
        if !ack.is_ok() {
            tracing::warn!(stat = %ack.stat, "Device refused new temperature");
            return Err(DeviceError::CommandRejected {
                reason: format!("failed to set temperature to {temperature}"),
                body: response.body().to_string(),
            }
            .into());
        }
        Ok(ack)
    }
}
