// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the water heater.

use std::time::Duration;

use reqwest::Client;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig
// ============================================================================

/// Connection parameters for a water heater.
///
/// The address is a host or `host:port`; the scheme is always plain HTTP.
///
/// # Examples
///
/// ```
/// use tesytalk::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("10.0.1.1");
/// assert_eq!(config.base_url(), "http://10.0.1.1");
///
/// let config = HttpConfig::new("10.0.1.1:8080").with_timeout(Duration::from_secs(3));
/// assert_eq!(config.base_url(), "http://10.0.1.1:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    address: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the given address.
    ///
    /// A leading `http://` and trailing slashes are tolerated and stripped.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let address = address
            .trim()
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string();
        Self {
            address,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the address (host or `host:port`).
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the address is empty or
    /// asks for a scheme other than plain HTTP, or `ProtocolError::Http`
    /// if the underlying client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.address.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "address is required".to_string(),
            ));
        }
        if self.address.contains("://") || self.address.contains('/') {
            return Err(ProtocolError::InvalidAddress(format!(
                "expected host or host:port, got '{}'",
                self.address
            )));
        }

        let base_url = self.base_url();

        // Connections are not kept around between requests.
        let client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { base_url, client })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for a water heater.
///
/// # Examples
///
/// ```no_run
/// use tesytalk::command::StatusCommand;
/// use tesytalk::protocol::{HttpConfig, Protocol};
///
/// # async fn example() -> tesytalk::Result<()> {
/// let client = HttpConfig::new("10.0.1.1").into_client()?;
/// let response = client.send_command(&StatusCommand::Status).await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the given address with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the client cannot be created.
    pub fn new(address: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(address).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a command, without its query string.
    #[must_use]
    pub fn url_for<C: Command + ?Sized>(&self, command: &C) -> String {
        format!("{}{}", self.base_url, command.path())
    }
}

impl Protocol for HttpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        let url = self.url_for(command);
        let mut request = self.client.get(&url);
        if let Some((key, value)) = command.query() {
            request = request.query(&[(key, value)]);
        }

        tracing::debug!(url = %url, query = ?command.query(), "Sending HTTP request");

        let response = request.send().await.map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::Status(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }
}
