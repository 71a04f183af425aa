// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `homespeak` library.
//!
//! This module provides the error hierarchy for the skill backend: hub
//! communication failures, configuration problems at startup, and the
//! unknown-area outcome of a scoped status query.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the hub.
    #[error("hub error: {0}")]
    Hub(#[from] HubError),

    /// Error occurred while loading configuration at startup.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The requested area has no registered mapping.
    ///
    /// This is a normal, expected outcome of an area-scoped query, not a
    /// failure: callers render a corrective message rather than an apology.
    /// Carries the normalized area name.
    #[error("no area mapping for {0}")]
    UnknownArea(String),
}

/// Errors related to hub communication.
///
/// A single read against the hub state API can fail in three ways, each
/// surfaced immediately to the caller. The client never retries.
#[derive(Debug, Error)]
pub enum HubError {
    /// Network failure or timeout reaching the hub.
    ///
    /// Timeouts abort the in-flight request at the connection level.
    #[error("hub unreachable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// Hub responded outside the 200-299 range.
    #[error("hub returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, kept for diagnosis.
        body: String,
    },

    /// Response body did not match the expected JSON shape.
    #[error("malformed hub response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors related to startup configuration.
///
/// Only startup can fail; once a skill is built, per-request paths degrade
/// to spoken fallbacks instead of erroring.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is missing or empty.
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    /// The area-mapping blob is not valid JSON of the expected shape.
    #[error("invalid area map: {0}")]
    InvalidAreaMap(#[source] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
