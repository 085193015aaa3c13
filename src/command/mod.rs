// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Water heater command definitions.
//!
//! Every operation the heater supports is a plain `GET` on a fixed path,
//! sometimes with a single query parameter.
//!
//! # Available Commands
//!
//! | Command Type | Path | Query |
//! |-------------|------|-------|
//! | [`StatusCommand::Status`] | `/status` | |
//! | [`StatusCommand::DeviceInfo`] | `/devstat` | |
//! | [`StatusCommand::PowerUsage`] | `/calcRes` | |
//! | [`ResetPowerCommand`] | `/resetPow` | |
//! | [`SetTemperatureCommand`] | `/setTemp` | `val=<degrees>` |
//!
//! # Examples
//!
//! ```
//! use tesytalk::command::{Command, SetTemperatureCommand, StatusCommand};
//! use tesytalk::types::Temperature;
//!
//! assert_eq!(StatusCommand::Status.path(), "/status");
//!
//! let cmd = SetTemperatureCommand::new(Temperature::new(60).unwrap());
//! assert_eq!(cmd.path(), "/setTemp");
//! assert_eq!(cmd.query(), Some(("val", "60".to_string())));
//! ```

mod energy;
mod status;
mod temperature;

pub use energy::ResetPowerCommand;
pub use status::StatusCommand;
pub use temperature::SetTemperatureCommand;

/// A command that can be sent to the water heater.
pub trait Command {
    /// Returns the request path, starting with `/`.
    fn path(&self) -> &'static str;

    /// Returns the query parameter to send, if any.
    fn query(&self) -> Option<(&'static str, String)> {
        None
    }

    /// Returns whether the command changes device state.
    fn is_mutating(&self) -> bool {
        false
    }
}
