// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed entity state from hub responses.
//!
//! The hub reports loosely shaped JSON records; they are validated and
//! defaulted here, at the parsing boundary, so downstream code never deals
//! with missing-field ambiguity.

use serde::Deserialize;

/// One entity state reported by the hub.
///
/// Constructed fresh from each hub response and immutable afterwards.
/// The domain is derived from the entity id's prefix, so the two can
/// never disagree.
///
/// # Examples
///
/// ```
/// use homespeak::DeviceState;
///
/// let light = DeviceState::new("light.kitchen_ceiling", "on");
/// assert_eq!(light.domain(), "light");
/// assert_eq!(light.display_name(), "kitchen ceiling");
///
/// let named = DeviceState::new("light.kitchen", "on")
///     .with_friendly_name("Kitchen Light");
/// assert_eq!(named.display_name(), "Kitchen Light");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    id: String,
    domain: String,
    state: String,
    device_class: Option<String>,
    friendly_name: Option<String>,
}

impl DeviceState {
    /// Creates an entity state with the given id and state value.
    ///
    /// The domain is derived as the id prefix before the first `.`,
    /// empty when the id carries no separator.
    #[must_use]
    pub fn new(id: impl Into<String>, state: impl Into<String>) -> Self {
        let id = id.into();
        let domain = id
            .split_once('.')
            .map(|(domain, _)| domain.to_string())
            .unwrap_or_default();
        Self {
            id,
            domain,
            state: state.into(),
            device_class: None,
            friendly_name: None,
        }
    }

    /// Sets the device class attribute.
    ///
    /// Only meaningful for `binary_sensor` entities, where it distinguishes
    /// door and opening sensors from other binary sensors.
    #[must_use]
    pub fn with_device_class(mut self, device_class: impl Into<String>) -> Self {
        self.device_class = Some(device_class.into());
        self
    }

    /// Sets the human-readable label.
    #[must_use]
    pub fn with_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    /// Returns the entity id (`<domain>.<name>` format).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the domain derived from the entity id.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the raw state value.
    ///
    /// Compared case-sensitively against known values (`"on"`, `"off"`,
    /// `"unknown"`).
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the device class attribute, if reported.
    #[must_use]
    pub fn device_class(&self) -> Option<&str> {
        self.device_class.as_deref()
    }

    /// Returns the human-readable label, if reported.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    /// Resolves the spoken display name for this entity.
    ///
    /// Uses the friendly name when present and non-empty, otherwise the
    /// entity id's suffix after the last `.` with underscores replaced
    /// by spaces.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.friendly_name.as_deref()
            && !name.is_empty()
        {
            return name.to_string();
        }
        let suffix = self
            .id
            .rsplit_once('.')
            .map_or(self.id.as_str(), |(_, suffix)| suffix);
        suffix.replace('_', " ")
    }
}

/// Entity state as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEntityState {
    pub entity_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: RawAttributes,
}

/// Attributes subset relevant to status queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawAttributes {
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub device_class: Option<String>,
}

impl From<RawEntityState> for DeviceState {
    fn from(raw: RawEntityState) -> Self {
        let mut entity = DeviceState::new(raw.entity_id, raw.state);
        if let Some(device_class) = raw.attributes.device_class {
            entity = entity.with_device_class(device_class);
        }
        // Empty labels are dropped here so display resolution falls back
        // to the derived name.
        if let Some(friendly_name) = raw.attributes.friendly_name
            && !friendly_name.is_empty()
        {
            entity = entity.with_friendly_name(friendly_name);
        }
        entity
    }
}
