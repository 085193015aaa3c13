// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature command.

use crate::command::Command;
use crate::types::Temperature;

/// Sets the target water temperature.
///
/// The value travels as the `val` query parameter. Range checking happens
/// when the [`Temperature`] is built, so a command always carries a value
/// the device accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTemperatureCommand {
    temperature: Temperature,
}

impl SetTemperatureCommand {
    /// Creates a command for the given target temperature.
    #[must_use]
    pub const fn new(temperature: Temperature) -> Self {
        Self { temperature }
    }

    /// Returns the requested temperature.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }
}

impl Command for SetTemperatureCommand {
    fn path(&self) -> &'static str {
        "/setTemp"
    }

    fn query(&self) -> Option<(&'static str, String)> {
        Some(("val", self.temperature.to_string()))
    }

    fn is_mutating(&self) -> bool {
        true
    }
}
