// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Area-to-entity mappings.
//!
//! Areas are a user-facing grouping of entities ("kitchen", "garage")
//! configured by the operator, independent of any hub-native structuring.
//! The registry is built once at startup and read-only afterwards, so it is
//! safe to share across concurrent invocations by plain reference.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::error::ConfigError;

/// Entity ids belonging to one named area.
///
/// Either set may be missing from the configuration blob; a missing set
/// defaults to empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AreaSpec {
    /// Light entity ids in this area.
    #[serde(default)]
    pub lights: HashSet<String>,
    /// Door sensor entity ids in this area.
    #[serde(default)]
    pub doors: HashSet<String>,
}

impl AreaSpec {
    /// Returns true if the given light entity belongs to this area.
    #[must_use]
    pub fn has_light(&self, entity_id: &str) -> bool {
        self.lights.contains(entity_id)
    }

    /// Returns true if the given door entity belongs to this area.
    #[must_use]
    pub fn has_door(&self, entity_id: &str) -> bool {
        self.doors.contains(entity_id)
    }
}

/// Read-only mapping from normalized area name to [`AreaSpec`].
///
/// Names are matched only after normalization (trim + lowercase); there is
/// no fuzzy or partial matching. Absence of an area key is a distinct,
/// observable condition, not an empty spec.
///
/// # Examples
///
/// ```
/// use homespeak::AreaRegistry;
///
/// let registry = AreaRegistry::from_json(
///     r#"{"kitchen": {"lights": ["light.kitchen"], "doors": []}}"#,
/// )
/// .unwrap();
///
/// assert!(registry.lookup(" Kitchen ").is_some());
/// assert!(registry.lookup("garage").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AreaRegistry {
    areas: HashMap<String, AreaSpec>,
}

impl AreaRegistry {
    /// Creates an empty registry.
    ///
    /// An empty registry behaves like a populated one with no keys: every
    /// lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a registry from a JSON configuration blob.
    ///
    /// The expected shape is a map from area name to
    /// `{ "lights": [ids], "doors": [ids] }`. Keys are normalized on load.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAreaMap`] if the blob is not valid
    /// JSON of the expected shape.
    pub fn from_json(blob: &str) -> Result<Self, ConfigError> {
        let parsed: HashMap<String, AreaSpec> =
            serde_json::from_str(blob).map_err(ConfigError::InvalidAreaMap)?;
        Ok(Self::from_areas(parsed))
    }

    /// Builds a registry from a JSON blob, degrading to empty on failure.
    ///
    /// This is the startup path: a malformed blob must never prevent the
    /// process from serving requests, so the failure is logged as a warning
    /// and an empty registry is returned instead.
    #[must_use]
    pub fn from_json_lossy(blob: &str) -> Self {
        match Self::from_json(blob) {
            Ok(registry) => registry,
            Err(err) => {
                tracing::warn!(%err, "invalid area map, continuing with an empty registry");
                Self::empty()
            }
        }
    }

    /// Builds a registry from name/spec pairs, normalizing the names.
    #[must_use]
    pub fn from_areas<I, K>(areas: I) -> Self
    where
        I: IntoIterator<Item = (K, AreaSpec)>,
        K: AsRef<str>,
    {
        let areas = areas
            .into_iter()
            .map(|(name, spec)| (normalize(name.as_ref()), spec))
            .collect();
        Self { areas }
    }

    /// Looks up the spec for an area name.
    ///
    /// The name is normalized before matching.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&AreaSpec> {
        self.areas.get(&normalize(name))
    }

    /// Returns the number of registered areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns true if no areas are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Normalizes an area name for matching: trim + lowercase.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
