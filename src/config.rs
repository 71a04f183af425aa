// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Skill configuration.
//!
//! Loaded once at process start, read-only thereafter. Only this step may
//! fail: missing connection settings abort startup, while a malformed area
//! map or timeout value degrades with a warning so the skill still serves
//! requests.

use std::env;
use std::time::Duration;

use crate::area::AreaRegistry;
use crate::error::ConfigError;
use crate::hub::HubConfig;
use crate::skill::Skill;

/// Configuration for building a [`Skill`].
///
/// # Examples
///
/// ```
/// use homespeak::SkillConfig;
/// use std::time::Duration;
///
/// let skill = SkillConfig::new("http://hub.local:8123", "token")
///     .with_summary_sensor("sensor.alarm_panel")
///     .with_timeout(Duration::from_secs(2))
///     .with_area_map(r#"{"kitchen": {"lights": ["light.kitchen"]}}"#)
///     .into_skill()
///     .unwrap();
/// assert_eq!(skill.registry().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SkillConfig {
    base_url: String,
    token: String,
    summary_sensor: String,
    timeout: Duration,
    area_map: Option<String>,
}

impl SkillConfig {
    /// Environment variable holding the hub base URL (required).
    pub const ENV_BASE_URL: &'static str = "HA_BASE_URL";
    /// Environment variable holding the bearer token (required).
    pub const ENV_TOKEN: &'static str = "HA_TOKEN";
    /// Environment variable overriding the summary sensor entity id.
    pub const ENV_SENSOR: &'static str = "HA_SENSOR";
    /// Environment variable overriding the request timeout in milliseconds.
    pub const ENV_TIMEOUT_MS: &'static str = "HA_TIMEOUT_MS";
    /// Environment variable holding the area-mapping JSON blob.
    pub const ENV_AREA_MAP: &'static str = "AREA_MAP_JSON";

    /// Creates a configuration with the required connection settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            summary_sensor: Skill::DEFAULT_SUMMARY_SENSOR.to_string(),
            timeout: HubConfig::DEFAULT_TIMEOUT,
            area_map: None,
        }
    }

    /// Sets the summary sensor entity id.
    #[must_use]
    pub fn with_summary_sensor(mut self, entity_id: impl Into<String>) -> Self {
        self.summary_sensor = entity_id.into();
        self
    }

    /// Sets the hub request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the area-mapping JSON blob.
    #[must_use]
    pub fn with_area_map(mut self, blob: impl Into<String>) -> Self {
        self.area_map = Some(blob.into());
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `HA_BASE_URL` or `HA_TOKEN`
    /// is absent or empty. Optional settings never fail: a malformed
    /// `HA_TIMEOUT_MS` falls back to the default with a warning, and a
    /// malformed `AREA_MAP_JSON` degrades to an empty registry later, at
    /// [`SkillConfig::into_skill`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through a settings lookup.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SkillConfig::from_env`].
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| {
            get(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let mut config = Self::new(require(Self::ENV_BASE_URL)?, require(Self::ENV_TOKEN)?);

        if let Some(sensor) = get(Self::ENV_SENSOR).filter(|sensor| !sensor.is_empty()) {
            config = config.with_summary_sensor(sensor);
        }

        if let Some(raw) = get(Self::ENV_TIMEOUT_MS) {
            match raw.parse::<u64>() {
                Ok(ms) => config = config.with_timeout(Duration::from_millis(ms)),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid HA_TIMEOUT_MS");
                }
            }
        }

        if let Some(blob) = get(Self::ENV_AREA_MAP) {
            config = config.with_area_map(blob);
        }

        Ok(config)
    }

    /// Builds the skill: hub client plus area registry.
    ///
    /// The area map is parsed here, lossily — a malformed blob logs a
    /// warning and leaves the registry empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Client`] if the HTTP client cannot be built.
    pub fn into_skill(self) -> Result<Skill, ConfigError> {
        let registry = self
            .area_map
            .as_deref()
            .map(AreaRegistry::from_json_lossy)
            .unwrap_or_default();

        let hub = HubConfig::new(self.base_url, self.token)
            .with_timeout(self.timeout)
            .into_client()?;

        Ok(Skill::new(hub, registry).with_summary_sensor(self.summary_sensor))
    }
}
