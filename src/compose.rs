// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spoken-response composition.
//!
//! Pure functions from structured input to a speech/card text pair. The
//! phrasing here is a compatibility surface: the exact sentences are part
//! of the skill's observable behavior and are pinned by tests.

use crate::aggregate::StatusSummary;

/// Spoken fallback when the summary sensor state is missing or unknown.
pub const UNKNOWN_STATE_FALLBACK: &str = "I could not determine the current house status.";

/// Apology when the summary sensor could not be fetched.
pub const STATUS_APOLOGY: &str = "Sorry, Home Assistant did not respond. Please try again.";

/// Apology when the state snapshot could not be fetched.
pub const DETAILS_APOLOGY: &str = "Sorry, I could not get details from Home Assistant.";

/// Apology for any otherwise-unhandled failure.
pub const GENERIC_APOLOGY: &str = "Sorry, something went wrong.";

/// Prompt spoken when a session opens without a specific request.
pub const LAUNCH_PROMPT: &str = "Ask me how’s the house, or say details.";

/// Prompt spoken in response to a help request.
pub const HELP_PROMPT: &str =
    "Say how’s the house, or which lights are on. You can also say, which doors are open in the kitchen.";

/// Acknowledgement for cancel/stop requests.
pub const STOP_RESPONSE: &str = "Okay.";

const CARD_TITLE_STATUS: &str = "Home Status";
const CARD_TITLE_DETAILS: &str = "Home Details";

/// A display card accompanying a spoken response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card title.
    pub title: String,
    /// Card body; identical in content to the speech.
    pub body: String,
}

/// A composed response: spoken text plus optional reprompt and card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// The text to speak.
    pub speech: String,
    /// Reprompt text for prompts that keep the session open.
    pub reprompt: Option<String>,
    /// Display card, when the response carries one.
    pub card: Option<Card>,
}

impl Utterance {
    /// Creates a speech-only utterance.
    #[must_use]
    pub fn speak(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: None,
            card: None,
        }
    }

    /// Attaches a display card whose body mirrors the speech.
    #[must_use]
    pub fn with_card(mut self, title: impl Into<String>) -> Self {
        self.card = Some(Card {
            title: title.into(),
            body: self.speech.clone(),
        });
        self
    }

    /// Attaches a reprompt, keeping the session open.
    #[must_use]
    pub fn with_reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt = Some(reprompt.into());
        self
    }
}

/// Renders a status summary into spoken text.
///
/// Clause rules: an area-scoped summary opens with `In the <area>:`; the
/// lights clause lists names joined with `", "` or reads "No lights are
/// on"; the doors clause lists names or reads "All doors are closed"; the
/// " there" suffix appears on empty clauses only when an area was
/// requested. Clauses are joined with `". "` and the sentence ends with a
/// single period.
#[must_use]
pub fn summary(summary: &StatusSummary) -> Utterance {
    let there = if summary.area.is_some() { " there" } else { "" };

    let lights = if summary.lights_on.is_empty() {
        format!("No lights are on{there}")
    } else {
        format!("Lights on: {}", summary.lights_on.join(", "))
    };

    let doors = if summary.doors_open.is_empty() {
        format!("All doors are closed{there}")
    } else {
        format!("Open doors: {}", summary.doors_open.join(", "))
    };

    let clauses = format!("{lights}. {doors}.");
    let speech = match &summary.area {
        Some(area) => format!("In the {area}: {clauses}"),
        None => clauses,
    };

    Utterance::speak(speech).with_card(CARD_TITLE_DETAILS)
}

/// Renders a single sensor state value.
///
/// Speaks the raw value verbatim when present and not the literal
/// `"unknown"`, otherwise a fixed fallback sentence.
#[must_use]
pub fn single_state(value: Option<&str>) -> Utterance {
    let speech = match value {
        Some(value) if value != "unknown" => value.to_string(),
        _ => UNKNOWN_STATE_FALLBACK.to_string(),
    };
    Utterance::speak(speech).with_card(CARD_TITLE_STATUS)
}

/// Renders the corrective message for an unmapped area.
#[must_use]
pub fn unknown_area(area: &str) -> Utterance {
    let speech =
        format!("I don't have area mappings for {area}. You can add them to the area configuration.");
    Utterance::speak(speech).with_card(CARD_TITLE_DETAILS)
}

/// Renders the session-opening prompt.
#[must_use]
pub fn launch() -> Utterance {
    Utterance::speak(LAUNCH_PROMPT).with_reprompt(LAUNCH_PROMPT)
}

/// Renders the help prompt.
#[must_use]
pub fn help() -> Utterance {
    Utterance::speak(HELP_PROMPT).with_reprompt(HELP_PROMPT)
}

/// Renders the cancel/stop acknowledgement.
#[must_use]
pub fn stop() -> Utterance {
    Utterance::speak(STOP_RESPONSE)
}
