// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intent dispatch.
//!
//! Thin glue between the voice platform and the core: maps an already-
//! parsed intent to the appropriate hub query, aggregation and phrasing,
//! and converts every failure into a spoken fallback. No failure escapes
//! [`Skill::handle`].

use crate::aggregate::StatusAggregator;
use crate::area::AreaRegistry;
use crate::compose::{self, Utterance};
use crate::error::Error;
use crate::hub::HubClient;

/// An already-parsed platform request.
///
/// Intent and slot recognition happen on the voice platform; this enum is
/// what arrives after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Session opened without a specific request.
    Launch,
    /// "How's the house" — reads the configured summary sensor.
    HomeStatus,
    /// "Which lights are on", optionally scoped to an area slot.
    Details {
        /// Raw area slot value, if the user named one.
        area: Option<String>,
    },
    /// Help request.
    Help,
    /// Cancel or stop request.
    Stop,
}

/// The skill backend: hub client, area registry and dispatch.
///
/// Each invocation is an independent request-response cycle; the registry
/// is the only shared state and it is read-only, so concurrent invocations
/// need no locking.
///
/// # Examples
///
/// ```no_run
/// use homespeak::{AreaRegistry, HubConfig, Intent, Skill};
///
/// # async fn example() -> homespeak::Result<()> {
/// let hub = HubConfig::new("http://hub.local:8123", "token").into_client()?;
/// let skill = Skill::new(hub, AreaRegistry::empty());
///
/// let utterance = skill
///     .handle(Intent::Details { area: Some("kitchen".to_string()) })
///     .await;
/// println!("{}", utterance.speech);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Skill {
    hub: HubClient,
    registry: AreaRegistry,
    summary_sensor: String,
}

impl Skill {
    /// Default entity queried for the single-sensor house summary.
    pub const DEFAULT_SUMMARY_SENSOR: &'static str = "sensor.house_status_summary";

    /// Creates a skill over the given hub client and area registry.
    #[must_use]
    pub fn new(hub: HubClient, registry: AreaRegistry) -> Self {
        Self {
            hub,
            registry,
            summary_sensor: Self::DEFAULT_SUMMARY_SENSOR.to_string(),
        }
    }

    /// Overrides the summary sensor entity id.
    #[must_use]
    pub fn with_summary_sensor(mut self, entity_id: impl Into<String>) -> Self {
        self.summary_sensor = entity_id.into();
        self
    }

    /// Returns the area registry.
    #[must_use]
    pub fn registry(&self) -> &AreaRegistry {
        &self.registry
    }

    /// Dispatches an intent to the matching handler.
    ///
    /// Total: every outcome, including hub failures, becomes a spoken
    /// utterance.
    pub async fn handle(&self, intent: Intent) -> Utterance {
        match intent {
            Intent::Launch => compose::launch(),
            Intent::HomeStatus => self.home_status().await,
            Intent::Details { area } => self.details(area.as_deref()).await,
            Intent::Help => compose::help(),
            Intent::Stop => compose::stop(),
        }
    }

    /// Answers the overall-status query from the summary sensor.
    pub async fn home_status(&self) -> Utterance {
        match self.hub.state(&self.summary_sensor).await {
            Ok(entity) => {
                let value = Some(entity.state()).filter(|state| !state.is_empty());
                compose::single_state(value)
            }
            Err(err) => {
                tracing::error!(sensor = %self.summary_sensor, %err, "summary sensor fetch failed");
                Utterance::speak(compose::STATUS_APOLOGY)
            }
        }
    }

    /// Answers the details query, optionally scoped to an area.
    ///
    /// An empty or whitespace-only area slot is treated as no area.
    pub async fn details(&self, area: Option<&str>) -> Utterance {
        let snapshot = match self.hub.states().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!(%err, "state snapshot fetch failed");
                return Utterance::speak(compose::DETAILS_APOLOGY);
            }
        };

        let area = area.map(str::trim).filter(|area| !area.is_empty());

        match StatusAggregator::new(&self.registry).aggregate(&snapshot, area) {
            Ok(summary) => compose::summary(&summary),
            Err(Error::UnknownArea(area)) => compose::unknown_area(&area),
            Err(err) => {
                tracing::error!(%err, "details aggregation failed");
                Utterance::speak(compose::GENERIC_APOLOGY)
            }
        }
    }
}
