// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tesytalk` - talk to Tesy water heaters over their local HTTP API.
//!
//! The heater exposes a handful of `GET` endpoints returning small JSON
//! objects. This crate wraps them in typed requests and responses, derives
//! energy use and time since the last counter reset, and ships a command-line
//! tool on top.
//!
//! # Supported Features
//!
//! - **Status**: heater state, current and target temperature, tank volume
//! - **Energy**: kWh since the last reset and how long ago that was
//! - **Control**: set the target temperature (1-70 ℃), reset the counter
//! - **Identity**: device ID and MAC address
//!
//! # Quick Start
//!
//! ```no_run
//! use tesytalk::Device;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> tesytalk::Result<()> {
//!     let device = Device::http("192.168.1.50")?;
//!
//!     let report = device.report(true).await?;
//!     print!("{report}");
//!     println!("{:.2} kWh", report.kwh());
//!
//!     Ok(())
//! }
//! ```

pub mod command;
mod device;
pub mod error;
pub mod metrics;
pub mod protocol;
mod report;
pub mod response;
pub mod runner;
pub mod types;

pub use command::{Command, ResetPowerCommand, SetTemperatureCommand, StatusCommand};
pub use device::Device;
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig, Protocol};
pub use report::Report;
pub use response::{
    DeviceInfoResponse, PowerUsageResponse, ResetPowerResponse, SetTemperatureResponse,
    StatusResponse,
};
pub use runner::{Action, Outcome};
pub use types::{DeviceDateTime, HeaterState, Temperature, TimeParseError};
