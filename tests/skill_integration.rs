// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests for intent dispatch using wiremock.

use std::time::Duration;

use homespeak::{Intent, Skill, SkillConfig, compose};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AREA_MAP: &str = r#"{
    "kitchen": {
        "lights": ["light.kitchen"],
        "doors": ["binary_sensor.kitchen_window"]
    },
    "attic": {}
}"#;

fn skill_for(server: &MockServer) -> Skill {
    SkillConfig::new(server.uri(), "secret-token")
        .with_timeout(Duration::from_millis(500))
        .with_area_map(AREA_MAP)
        .into_skill()
        .unwrap()
}

fn snapshot_body() -> serde_json::Value {
    serde_json::json!([
        {
            "entity_id": "light.kitchen",
            "state": "on",
            "attributes": {"friendly_name": "Kitchen Light"}
        },
        {
            "entity_id": "light.bedroom_lamp",
            "state": "on",
            "attributes": {}
        },
        {
            "entity_id": "light.hallway",
            "state": "off",
            "attributes": {}
        },
        {
            "entity_id": "binary_sensor.front_door",
            "state": "on",
            "attributes": {"device_class": "door"}
        },
        {
            "entity_id": "binary_sensor.kitchen_window",
            "state": "off",
            "attributes": {"device_class": "opening"}
        },
        {
            "entity_id": "binary_sensor.motion_hall",
            "state": "on",
            "attributes": {"device_class": "motion"}
        }
    ])
}

async fn mount_snapshot(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body()))
        .mount(server)
        .await;
}

// ============================================================================
// Details intent
// ============================================================================

mod details {
    use super::*;

    #[tokio::test]
    async fn whole_house_summary() {
        let mock_server = MockServer::start().await;
        mount_snapshot(&mock_server).await;

        let utterance = skill_for(&mock_server)
            .handle(Intent::Details { area: None })
            .await;

        assert_eq!(
            utterance.speech,
            "Lights on: Kitchen Light, bedroom lamp. Open doors: front door."
        );
        let card = utterance.card.unwrap();
        assert_eq!(card.title, "Home Details");
        assert_eq!(card.body, utterance.speech);
    }

    #[tokio::test]
    async fn area_scoped_summary() {
        let mock_server = MockServer::start().await;
        mount_snapshot(&mock_server).await;

        let utterance = skill_for(&mock_server)
            .handle(Intent::Details {
                area: Some("Kitchen".to_string()),
            })
            .await;

        assert_eq!(
            utterance.speech,
            "In the kitchen: Lights on: Kitchen Light. All doors are closed there."
        );
    }

    #[tokio::test]
    async fn registered_area_with_no_devices() {
        let mock_server = MockServer::start().await;
        mount_snapshot(&mock_server).await;

        let utterance = skill_for(&mock_server)
            .handle(Intent::Details {
                area: Some("attic".to_string()),
            })
            .await;

        assert_eq!(
            utterance.speech,
            "In the attic: No lights are on there. All doors are closed there."
        );
    }

    #[tokio::test]
    async fn unknown_area_gets_corrective_message() {
        let mock_server = MockServer::start().await;
        mount_snapshot(&mock_server).await;

        let utterance = skill_for(&mock_server)
            .handle(Intent::Details {
                area: Some("garage".to_string()),
            })
            .await;

        assert_eq!(
            utterance.speech,
            "I don't have area mappings for garage. You can add them to the area configuration."
        );
    }

    #[tokio::test]
    async fn unknown_area_without_any_map_configured() {
        let mock_server = MockServer::start().await;
        mount_snapshot(&mock_server).await;

        let skill = SkillConfig::new(mock_server.uri(), "secret-token")
            .into_skill()
            .unwrap();
        let utterance = skill
            .handle(Intent::Details {
                area: Some("kitchen".to_string()),
            })
            .await;

        assert_eq!(
            utterance.speech,
            "I don't have area mappings for kitchen. You can add them to the area configuration."
        );
    }

    #[tokio::test]
    async fn blank_area_slot_means_whole_house() {
        let mock_server = MockServer::start().await;
        mount_snapshot(&mock_server).await;

        let utterance = skill_for(&mock_server)
            .handle(Intent::Details {
                area: Some("   ".to_string()),
            })
            .await;

        assert_eq!(
            utterance.speech,
            "Lights on: Kitchen Light, bedroom lamp. Open doors: front door."
        );
    }

    #[tokio::test]
    async fn hub_failure_gets_apology() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/states"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let utterance = skill_for(&mock_server)
            .handle(Intent::Details { area: None })
            .await;

        assert_eq!(utterance.speech, compose::DETAILS_APOLOGY);
        assert!(utterance.card.is_none());
    }
}

// ============================================================================
// Home status intent
// ============================================================================

mod home_status {
    use super::*;

    async fn mount_sensor(server: &MockServer, state: &str) {
        Mock::given(method("GET"))
            .and(path("/api/states/sensor.house_status_summary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "entity_id": "sensor.house_status_summary",
                "state": state,
                "attributes": {}
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn speaks_sensor_state_verbatim() {
        let mock_server = MockServer::start().await;
        mount_sensor(&mock_server, "home_secure").await;

        let utterance = skill_for(&mock_server).handle(Intent::HomeStatus).await;

        assert_eq!(utterance.speech, "home_secure");
        assert_eq!(utterance.card.unwrap().title, "Home Status");
    }

    #[tokio::test]
    async fn unknown_state_falls_back() {
        let mock_server = MockServer::start().await;
        mount_sensor(&mock_server, "unknown").await;

        let utterance = skill_for(&mock_server).handle(Intent::HomeStatus).await;

        assert_eq!(utterance.speech, compose::UNKNOWN_STATE_FALLBACK);
    }

    #[tokio::test]
    async fn custom_summary_sensor_is_queried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/states/sensor.alarm_panel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "entity_id": "sensor.alarm_panel",
                "state": "armed_away",
                "attributes": {}
            })))
            .mount(&mock_server)
            .await;

        let skill = SkillConfig::new(mock_server.uri(), "secret-token")
            .with_summary_sensor("sensor.alarm_panel")
            .into_skill()
            .unwrap();

        let utterance = skill.handle(Intent::HomeStatus).await;
        assert_eq!(utterance.speech, "armed_away");
    }

    #[tokio::test]
    async fn hub_failure_gets_apology() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let utterance = skill_for(&mock_server).handle(Intent::HomeStatus).await;

        assert_eq!(utterance.speech, compose::STATUS_APOLOGY);
        assert!(utterance.card.is_none());
    }

    #[tokio::test]
    async fn timeout_gets_apology_without_hanging() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"state": "home_secure"}))
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&mock_server)
            .await;

        let utterance = skill_for(&mock_server).handle(Intent::HomeStatus).await;

        assert_eq!(utterance.speech, compose::STATUS_APOLOGY);
    }
}

// ============================================================================
// Session intents (no hub call)
// ============================================================================

mod session {
    use super::*;

    #[tokio::test]
    async fn launch_prompts_and_reprompts() {
        let mock_server = MockServer::start().await;
        let utterance = skill_for(&mock_server).handle(Intent::Launch).await;

        assert_eq!(utterance.speech, compose::LAUNCH_PROMPT);
        assert_eq!(utterance.reprompt.as_deref(), Some(compose::LAUNCH_PROMPT));
    }

    #[tokio::test]
    async fn help_prompts_and_reprompts() {
        let mock_server = MockServer::start().await;
        let utterance = skill_for(&mock_server).handle(Intent::Help).await;

        assert_eq!(utterance.speech, compose::HELP_PROMPT);
        assert_eq!(utterance.reprompt.as_deref(), Some(compose::HELP_PROMPT));
    }

    #[tokio::test]
    async fn stop_acknowledges_and_closes() {
        let mock_server = MockServer::start().await;
        let utterance = skill_for(&mock_server).handle(Intent::Stop).await;

        assert_eq!(utterance.speech, compose::STOP_RESPONSE);
        assert!(utterance.reprompt.is_none());
    }
}
