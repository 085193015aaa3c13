// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater state reported by `/status`.

use std::fmt;

use serde::Deserialize;

/// What the heating element is currently doing.
///
/// Firmware revisions are not consistent about the set of states, so unknown
/// values are kept verbatim in [`HeaterState::Other`].
///
/// # Examples
///
/// ```
/// use tesytalk::types::HeaterState;
///
/// assert_eq!(HeaterState::from("READY"), HeaterState::Ready);
/// assert_eq!(HeaterState::from("HEATING").as_str(), "HEATING");
/// assert_eq!(HeaterState::from("BOOST").as_str(), "BOOST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum HeaterState {
    /// Water is at the target temperature.
    Ready,
    /// The element is on.
    Heating,
    /// Any other state string.
    Other(String),
    /// The field was absent from the response.
    #[default]
    Unknown,
}

impl HeaterState {
    /// Returns the state as reported by the device.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "READY",
            Self::Heating => "HEATING",
            Self::Other(state) => state,
            Self::Unknown => "",
        }
    }
}

impl From<&str> for HeaterState {
    fn from(value: &str) -> Self {
        match value {
            "READY" => Self::Ready,
            "HEATING" => Self::Heating,
            "" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for HeaterState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for HeaterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
