// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for water heater control.
//!
//! # Types
//!
//! - [`Temperature`] - Target temperature in degrees Celsius (1-70)
//! - [`HeaterState`] - What the heating element is doing
//! - [`DeviceDateTime`] - Device wall-clock time with its zone abbreviation

mod datetime;
mod heater_state;
mod temperature;

pub use datetime::{DeviceDateTime, TimeParseError};
pub use heater_state::HeaterState;
pub use temperature::Temperature;
