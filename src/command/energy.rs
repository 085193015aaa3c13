// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy counter commands.

use crate::command::Command;

/// Resets the cumulative energy counter and its reset timestamp.
///
/// The device acknowledges with `{"err":"0"}` on success.
///
/// # Examples
///
/// ```
/// use tesytalk::command::{Command, ResetPowerCommand};
///
/// assert_eq!(ResetPowerCommand.path(), "/resetPow");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetPowerCommand;

impl Command for ResetPowerCommand {
    fn path(&self) -> &'static str {
        "/resetPow"
    }

    fn is_mutating(&self) -> bool {
        true
    }
}
