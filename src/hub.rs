// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the hub state API.
//!
//! One authenticated read per invocation: either a single entity state or
//! the full snapshot. The client is fire-once — a failed attempt is
//! surfaced immediately; retry policy belongs to callers.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, HubError};
use crate::state::{DeviceState, RawEntityState};

// ============================================================================
// HubConfig - Connection parameters for the hub
// ============================================================================

/// Configuration for the hub connection.
///
/// # Examples
///
/// ```
/// use homespeak::HubConfig;
/// use std::time::Duration;
///
/// let client = HubConfig::new("http://hub.local:8123", "token")
///     .with_timeout(Duration::from_secs(2))
///     .into_client();
/// ```
#[derive(Debug, Clone)]
pub struct HubConfig {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl HubConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

    /// Creates a configuration for the given base URL and bearer token.
    ///
    /// A bare host is assumed to be `http://`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = if base_url.starts_with("http://") || base_url.starts_with("https://") {
            base_url
        } else {
            format!("http://{base_url}")
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    ///
    /// The timeout is enforced by the HTTP client itself: an expired
    /// deadline aborts the in-flight connection rather than abandoning it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a [`HubClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Client`] if the HTTP client cannot be built.
    pub fn into_client(self) -> Result<HubClient, ConfigError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ConfigError::Client)?;

        Ok(HubClient {
            base_url: self.base_url,
            token: self.token,
            client,
        })
    }
}

// ============================================================================
// HubClient - Authenticated reads against the state API
// ============================================================================

/// HTTP client for reading entity states from the hub.
///
/// Stateless between calls; safe to clone and share across invocations.
#[derive(Debug, Clone)]
pub struct HubClient {
    base_url: String,
    token: String,
    client: Client,
}

impl HubClient {
    /// Returns the base URL of the hub.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full state snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Unavailable`] on network failure or timeout,
    /// [`HubError::Status`] on a non-2xx response, and
    /// [`HubError::Malformed`] when the body is not the expected JSON.
    pub async fn states(&self) -> Result<Vec<DeviceState>, HubError> {
        let raw: Vec<RawEntityState> = self.get_json("/api/states").await?;
        Ok(raw.into_iter().map(DeviceState::from).collect())
    }

    /// Fetches the state of a single entity.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`HubClient::states`].
    pub async fn state(&self, entity_id: &str) -> Result<DeviceState, HubError> {
        let path = format!("/api/states/{}", urlencoding::encode(entity_id));
        let raw: RawEntityState = self.get_json(&path).await?;
        Ok(raw.into())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HubError> {
        let url = self.url(path);

        tracing::debug!(url = %url, "requesting hub state");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(HubError::Unavailable)?;

        let status = response.status();
        let body = response.text().await.map_err(HubError::Unavailable)?;

        if !status.is_success() {
            return Err(HubError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(bytes = body.len(), "received hub response");

        serde_json::from_str(&body).map_err(HubError::Malformed)
    }
}
