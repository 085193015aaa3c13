// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lenient number decoding shared by the response types.

use serde::Deserializer;
use serde::de::Error as _;
use serde_with::{DefaultOnNull, DeserializeAs, DisplayFromStr, PickFirst, Same};

/// A number sent bare or quoted. `null` reads as zero.
pub(crate) type Number = DefaultOnNull<PickFirst<(Same, DisplayFromStr)>>;

/// Like [`Number`], but `NaN` and infinities are rejected.
pub(crate) struct FiniteNumber;

impl<'de> DeserializeAs<'de, f64> for FiniteNumber {
    fn deserialize_as<D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <Number as DeserializeAs<'de, f64>>::deserialize_as(deserializer)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(D::Error::custom(format!(
                "expected a finite number, found {value}"
            )))
        }
    }
}
