// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ffi::OsString;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use tesytalk::error::ValueError;
use tesytalk::{Action, HttpConfig};

/// Long flags that may also be spelled with a single dash (`-address`).
const LONG_FLAGS: &[&str] = &[
    "address", "verbose", "resetpow", "settemp", "timeout", "help", "version",
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    /// Address of a tesy water heater, `host` or `host:port`.
    #[clap(long, env = "TESY_ADDRESS")]
    pub address: Option<String>,

    /// Print verbose information about the device.
    #[clap(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub verbose: bool,

    /// Reset the kWh calculator.
    #[clap(
        long = "resetpow",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub reset_power: bool,

    /// Set temperature, 1-70 are accepted.
    #[clap(long = "settemp", value_name = "DEGREES", allow_negative_numbers = true)]
    pub set_temperature: Option<i64>,

    /// Request timeout in seconds.
    #[clap(long = "timeout", value_name = "SECONDS", env = "TESY_TIMEOUT", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Args {
    pub fn action(&self) -> Result<Action, ValueError> {
        Action::from_flags(self.reset_power, self.set_temperature, self.verbose)
    }

    /// Builds the connection settings, if an address was given.
    pub fn http_config(&self) -> Option<HttpConfig> {
        self.address
            .as_deref()
            .filter(|address| !address.trim().is_empty())
            .map(|address| {
                HttpConfig::new(address).with_timeout(Duration::from_secs(self.timeout_secs))
            })
    }
}

/// Rewrites `-address` and `-address=x` into their double-dash forms.
///
/// Single-character flags, values and anything already using `--` pass
/// through unchanged.
pub fn expand_single_dash_longs<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
