// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `homespeak` - A Rust library for answering spoken home-status queries.
//!
//! This library implements a voice-assistant skill backend: it reads entity
//! states from a Home Assistant style hub over its REST API, classifies
//! which lights are on and which doors are open (optionally scoped to a
//! configured area), and renders the result as deterministic spoken text
//! plus a display card.
//!
//! The library is read-only by design: it never controls devices, never
//! caches state between invocations, and receives already-parsed intents
//! from the voice platform.
//!
//! # Quick Start
//!
//! ## From the environment
//!
//! ```no_run
//! use homespeak::{Intent, SkillConfig};
//!
//! #[tokio::main]
//! async fn main() -> homespeak::Result<()> {
//!     // Reads HA_BASE_URL, HA_TOKEN and the optional overrides
//!     // (HA_SENSOR, HA_TIMEOUT_MS, AREA_MAP_JSON).
//!     let skill = SkillConfig::from_env()?.into_skill()?;
//!
//!     let utterance = skill.handle(Intent::HomeStatus).await;
//!     println!("{}", utterance.speech);
//!     Ok(())
//! }
//! ```
//!
//! ## Programmatic configuration
//!
//! ```no_run
//! use homespeak::{Intent, SkillConfig};
//!
//! #[tokio::main]
//! async fn main() -> homespeak::Result<()> {
//!     let skill = SkillConfig::new("http://hub.local:8123", "token")
//!         .with_area_map(r#"{"kitchen": {"lights": ["light.kitchen"]}}"#)
//!         .into_skill()?;
//!
//!     let utterance = skill
//!         .handle(Intent::Details { area: Some("kitchen".to_string()) })
//!         .await;
//!     println!("{}", utterance.speech);
//!     Ok(())
//! }
//! ```
//!
//! ## Core pieces directly
//!
//! The aggregation and phrasing layers are pure and usable without a hub:
//!
//! ```
//! use homespeak::{AreaRegistry, DeviceState, StatusAggregator, compose};
//!
//! let registry = AreaRegistry::empty();
//! let snapshot = vec![
//!     DeviceState::new("light.kitchen", "on").with_friendly_name("Kitchen Light"),
//!     DeviceState::new("binary_sensor.front_door", "on").with_device_class("door"),
//! ];
//!
//! let summary = StatusAggregator::new(&registry)
//!     .aggregate(&snapshot, None)
//!     .unwrap();
//! let utterance = compose::summary(&summary);
//! assert_eq!(
//!     utterance.speech,
//!     "Lights on: Kitchen Light. Open doors: front door.",
//! );
//! ```

mod aggregate;
pub mod area;
pub mod compose;
mod config;
pub mod error;
pub mod hub;
pub mod skill;
pub mod state;

pub use aggregate::{StatusAggregator, StatusSummary};
pub use area::{AreaRegistry, AreaSpec};
pub use compose::{Card, Utterance};
pub use config::SkillConfig;
pub use error::{ConfigError, Error, HubError, Result};
pub use hub::{HubClient, HubConfig};
pub use skill::{Intent, Skill};
pub use state::DeviceState;
