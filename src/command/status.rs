// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only status queries.

use crate::command::Command;

/// Queries that read device state without changing it.
///
/// # Examples
///
/// ```
/// use tesytalk::command::{Command, StatusCommand};
///
/// assert_eq!(StatusCommand::DeviceInfo.path(), "/devstat");
/// assert_eq!(StatusCommand::PowerUsage.path(), "/calcRes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCommand {
    /// Heater state, temperatures, volume, clock.
    Status,
    /// Device ID and MAC address.
    DeviceInfo,
    /// Energy counter since the last reset.
    PowerUsage,
}

impl Command for StatusCommand {
    fn path(&self) -> &'static str {
        match self {
            Self::Status => "/status",
            Self::DeviceInfo => "/devstat",
            Self::PowerUsage => "/calcRes",
        }
    }
}
