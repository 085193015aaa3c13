// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for water heater JSON payloads.
//!
//! The firmware quotes most numbers (`"gradus":"61.0"`). Every numeric field
//! here accepts either a JSON number or a string holding one; a string that
//! does not parse, or parses to `NaN` or an infinity, is a decode error.
//! Absent and `null` fields fall back to zero values and unknown fields are
//! ignored.

mod ack;
mod device;
mod number;
mod power;
mod status;

pub use ack::{ResetPowerResponse, SetTemperatureResponse};
pub use device::DeviceInfoResponse;
pub use power::PowerUsageResponse;
pub use status::StatusResponse;
