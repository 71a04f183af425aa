// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status aggregation and area filtering.
//!
//! The core of the skill: given a snapshot of all entity states from the
//! hub, determine which lights are on and which doors are open, optionally
//! restricted to a named area, and resolve the survivors to display names.

use crate::area::{AreaRegistry, normalize};
use crate::error::Error;
use crate::state::DeviceState;

/// Structured result of a status query.
///
/// Display names appear in the order their entities appeared in the hub
/// snapshot; they are never sorted. An entity contributes to at most one
/// of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// The normalized area the summary is scoped to, if any.
    pub area: Option<String>,
    /// Display names of lights currently on.
    pub lights_on: Vec<String>,
    /// Display names of door sensors currently open.
    pub doors_open: Vec<String>,
}

/// Classifies a snapshot into lights-on and doors-open, with optional
/// area scoping against a registry.
///
/// Aggregation is pure, synchronous computation: the same snapshot and
/// area always produce the same summary.
///
/// # Examples
///
/// ```
/// use homespeak::{AreaRegistry, DeviceState, StatusAggregator};
///
/// let registry = AreaRegistry::empty();
/// let snapshot = vec![
///     DeviceState::new("light.kitchen", "on"),
///     DeviceState::new("light.hallway", "off"),
/// ];
///
/// let summary = StatusAggregator::new(&registry)
///     .aggregate(&snapshot, None)
///     .unwrap();
/// assert_eq!(summary.lights_on, vec!["kitchen"]);
/// assert!(summary.doors_open.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatusAggregator<'a> {
    registry: &'a AreaRegistry,
}

impl<'a> StatusAggregator<'a> {
    /// Creates an aggregator over the given registry.
    #[must_use]
    pub fn new(registry: &'a AreaRegistry) -> Self {
        Self { registry }
    }

    /// Aggregates a snapshot into a [`StatusSummary`].
    ///
    /// Lights count as on when their domain is `light` and their state is
    /// `on`. Doors count as open when their domain is `binary_sensor`,
    /// their device class is `door` or `opening`, and their state is `on`.
    /// With an area requested, each partition is intersected with the
    /// area's entity sets, preserving snapshot order; an area with a
    /// registered spec but no matching devices yields empty lists, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownArea`] when an area is requested but the
    /// registry has no spec for it, regardless of snapshot contents.
    pub fn aggregate(
        &self,
        snapshot: &[DeviceState],
        area: Option<&str>,
    ) -> Result<StatusSummary, Error> {
        let mut lights_on: Vec<&DeviceState> = Vec::new();
        let mut doors_open: Vec<&DeviceState> = Vec::new();

        for entity in snapshot {
            if entity.domain() == "light" && entity.state() == "on" {
                lights_on.push(entity);
            } else if entity.domain() == "binary_sensor"
                && matches!(entity.device_class(), Some("door" | "opening"))
                && entity.state() == "on"
            {
                doors_open.push(entity);
            }
        }

        let area = match area {
            Some(name) => {
                let name = normalize(name);
                let Some(spec) = self.registry.lookup(&name) else {
                    return Err(Error::UnknownArea(name));
                };
                lights_on.retain(|entity| spec.has_light(entity.id()));
                doors_open.retain(|entity| spec.has_door(entity.id()));
                Some(name)
            }
            None => None,
        };

        Ok(StatusSummary {
            area,
            lights_on: lights_on.iter().map(|e| e.display_name()).collect(),
            doors_open: doors_open.iter().map(|e| e.display_name()).collect(),
        })
    }
}
