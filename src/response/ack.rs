// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Acknowledgements for mutating commands.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use super::number::Number;

/// Response from `/setTemp`. Success is exactly `"ok"`.
///
/// # Examples
///
/// ```
/// use tesytalk::response::SetTemperatureResponse;
///
/// let ack: SetTemperatureResponse = serde_json::from_str(r#"{"stat":"ok"}"#).unwrap();
/// assert!(ack.is_ok());
///
/// let ack: SetTemperatureResponse = serde_json::from_str(r#"{"stat":"OK"}"#).unwrap();
/// assert!(!ack.is_ok());
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SetTemperatureResponse {
    /// Status string.
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub stat: String,
}

impl SetTemperatureResponse {
    /// The literal the device sends on success.
    pub const SUCCESS: &'static str = "ok";

    /// Returns whether the device accepted the new temperature.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.stat == Self::SUCCESS
    }
}

/// Response from `/resetPow`. Success is an error code of zero.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ResetPowerResponse {
    /// Error code, `0` on success.
    #[serde(default)]
    #[serde_as(as = "Number")]
    pub err: i64,
}

impl ResetPowerResponse {
    /// Returns whether the counter was reset.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.err == 0
    }
}
