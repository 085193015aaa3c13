// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type for the `setTemp` command.
//!
//! The heater accepts whole degrees Celsius between 1 and 70. Values outside
//! that range are rejected here, before anything is sent over the network.

use std::fmt;

use crate::error::ValueError;

/// A target water temperature in whole degrees Celsius (1-70).
///
/// # Examples
///
/// ```
/// use tesytalk::types::Temperature;
///
/// let temp = Temperature::new(55).unwrap();
/// assert_eq!(temp.value(), 55);
///
/// assert!(Temperature::new(0).is_err());
/// assert!(Temperature::new(71).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Temperature(u8);

impl Temperature {
    /// Lowest temperature the heater accepts.
    pub const MIN: Self = Self(1);

    /// Highest temperature the heater accepts.
    pub const MAX: Self = Self(70);

    /// Creates a new target temperature.
    ///
    /// Takes an `i64` so that any integer a user typed can be checked
    /// without a lossy cast first.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside 1-70.
    pub fn new(value: i64) -> Result<Self, ValueError> {
        match u8::try_from(value) {
            Ok(degrees) if (Self::MIN.0..=Self::MAX.0).contains(&degrees) => Ok(Self(degrees)),
            _ => Err(ValueError::OutOfRange {
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
                actual: value,
            }),
        }
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Temperature {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
