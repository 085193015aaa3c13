// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity response parsing.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// Response from `/devstat`.
///
/// The firmware also reports things like the network interface type
/// (`"inetdev":"WIFI"`); those are ignored.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeviceInfoResponse {
    /// Device identifier, usually model plus firmware version.
    #[serde(rename = "devid", default)]
    #[serde_as(as = "DefaultOnNull")]
    pub device_id: String,

    /// MAC address as printed by the firmware.
    #[serde(rename = "macaddr", default)]
    #[serde_as(as = "DefaultOnNull")]
    pub mac_address: String,
}
