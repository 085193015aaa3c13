// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `tesytalk` library.
//!
//! Every failure is terminal for the operation that hit it: local value
//! validation, HTTP transport, JSON decoding, a device that refused a
//! command, or device timestamps that could not be interpreted.

use thiserror::Error;

pub use crate::types::TimeParseError;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value was rejected locally, before contacting the device.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The HTTP exchange with the device failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The device answered with something that is not the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device answered but signalled failure.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// Device timestamps could not be interpreted.
    #[error("time error: {0}")]
    Time(#[from] TimeParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },
}

/// Errors related to HTTP communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed, timed out, or the connection was refused.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status code.
    #[error("unexpected HTTP status: {0}")]
    Status(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed, including numeric fields that hold non-numbers.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by the device itself.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Command was rejected by the device.
    #[error("command rejected: {reason} (reply was: {body})")]
    CommandRejected {
        /// What the device refused to do.
        reason: String,
        /// The raw response body, for diagnostics.
        body: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
