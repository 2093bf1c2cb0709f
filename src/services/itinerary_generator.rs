//! Itinerary generation against the remote endpoint.
//!
//! Every failure mode collapses into displayable text: a missing credential,
//! exhausted rate-limit retries, and unclassified errors each map to a fixed
//! diagnostic, so callers never see an error type.

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::config::PlannerConfig;
use crate::message::TripRequest;

use super::gemini::{GenerateText, RemoteError};
use super::metrics_manager::MetricsManager;

/// Diagnostic returned whenever no credential is configured.
pub const API_KEY_MISSING: &str = "### ⚠️ API Key Not Configured\n\n\
No Google API key was found in the environment. Set `GOOGLE_API_KEY` to enable \
AI-generated itineraries, or switch to basic mode for a template itinerary.";

/// Generic clarification questions used when the remote call is rate limited.
pub const FALLBACK_QUESTIONS: &str = "### 🔎 Clarification Questions\n\n\
- Are there specific areas, neighborhoods, or regions you want to focus on?\n\
- What kinds of activities, cultural experiences, or local experiences interest you most?\n\
- Do you have any dietary restrictions, mobility concerns, or other requirements?";

/// Catch-all for a retry loop that exits without producing anything.
pub const GENERATION_UNAVAILABLE: &str =
    "⚠️ Error: Unable to generate an itinerary right now. Please try again later.";

/// Generates itineraries and clarification questions through a remote
/// transport, retrying transient failures with exponential backoff.
///
/// Stateless over its inputs: holds only the read-only transport handle and
/// retry policy, so concurrent submissions are safe.
pub struct ItineraryGenerator {
    transport: Option<Arc<dyn GenerateText>>,
    max_attempts: u32,
    base_delay: Duration,
}

impl ItineraryGenerator {
    /// A transport handed over without a configured credential is discarded:
    /// the remote path stays disabled and no network call can be issued.
    pub fn new(transport: Option<Arc<dyn GenerateText>>, config: &PlannerConfig) -> Self {
        Self {
            transport: if config.api_key.is_some() {
                transport
            } else {
                None
            },
            max_attempts: config.max_attempts,
            base_delay: config.base_delay,
        }
    }

    /// Generate a full day-by-day itinerary.
    ///
    /// Rate-limited failures are retried up to `max_attempts` total calls,
    /// waiting `base_delay * 2^attempt` plus up to a second of jitter between
    /// them. Exhausted retries degrade to a manual skeleton; any other
    /// failure returns immediately with the raw error text embedded.
    pub async fn generate_itinerary(&self, trip: &TripRequest, metrics: &MetricsManager) -> String {
        let Some(transport) = &self.transport else {
            metrics.record_outcome("not_configured").await;
            return API_KEY_MISSING.to_string();
        };

        let prompt = itinerary_prompt(trip);
        for attempt in 0..self.max_attempts {
            match transport.generate_text(&prompt).await {
                Ok(text) => {
                    metrics.record_outcome("success").await;
                    return text;
                }
                Err(err) if err.is_rate_limited() => {
                    if attempt + 1 < self.max_attempts {
                        let delay = backoff_delay(self.base_delay, attempt);
                        warn!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "generation rate limited, backing off"
                        );
                        tokio::time::sleep(delay).await;
                    } else {
                        metrics.record_outcome("rate_limited").await;
                        return rate_limit_message(trip);
                    }
                }
                Err(err) => {
                    metrics.record_outcome("failed").await;
                    return error_message(&err);
                }
            }
        }

        GENERATION_UNAVAILABLE.to_string()
    }

    /// Generate clarifying questions from a field summary. Single attempt:
    /// a rate limit degrades straight to the generic question set.
    pub async fn refine_inputs(&self, request_summary: &str) -> String {
        let Some(transport) = &self.transport else {
            return API_KEY_MISSING.to_string();
        };

        match transport.generate_text(&clarification_prompt(request_summary)).await {
            Ok(text) => text,
            Err(err) if err.is_rate_limited() => FALLBACK_QUESTIONS.to_string(),
            Err(err) => error_message(&err),
        }
    }
}

/// Backoff before retry `attempt + 1`: `base * 2^attempt` plus uniform
/// jitter in `[0, 1)` seconds.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base * 2u32.pow(attempt) + Duration::from_secs_f64(rand::random::<f64>())
}

fn itinerary_prompt(trip: &TripRequest) -> String {
    format!(
        "Create a travel itinerary for:\n\
         - Location: {}\n\
         - Duration: {} days\n\
         - Budget: {}\n\
         - Interests: {}\n\
         - Accommodation Preferences: {}\n\
         - Additional Notes: {}\n\n\
         Provide a detailed day-by-day itinerary with:\n\
         - Morning, afternoon, and evening activities.\n\
         - Dining recommendations.\n\
         - Suggestions for accommodation.",
        trip.location,
        trip.duration,
        trip.budget,
        trip.interests,
        trip.accommodation,
        trip.additional_notes.as_deref().unwrap_or("None"),
    )
}

fn clarification_prompt(request_summary: &str) -> String {
    format!(
        "Based on the user's inputs, generate clarifying questions for:\n\
         - Location (e.g., specific areas, neighborhoods, or regions they want to visit)\n\
         - Interests (e.g., specific types of activities, cultural experiences, or local experiences they're interested in)\n\
         - Additional requirements (e.g., dietary restrictions, mobility concerns, or specific preferences)\n\n\
         User Inputs:\n{request_summary}"
    )
}

fn error_message(err: &RemoteError) -> String {
    format!(
        "### ❌ Error Generating Itinerary\n\n\
         The generation service returned an error: {err}\n\n\
         Please try again, or switch to basic mode for a template itinerary."
    )
}

/// Degraded output after exhausting rate-limit retries: a rough manual
/// skeleton, deliberately simpler than the full fallback template.
fn rate_limit_message(trip: &TripRequest) -> String {
    let mut days = String::new();
    if trip.duration == 1 {
        days.push_str("**Day 1:** Arrive, explore near your accommodation, and depart.\n");
    } else {
        days.push_str("**Day 1:** Arrive, check in, and explore the area around your accommodation.\n");
        if trip.duration == 3 {
            days.push_str("**Day 2:** One main sight or activity per day, at your own pace.\n");
        } else if trip.duration > 3 {
            days.push_str(&format!(
                "**Days 2-{}:** One main sight or activity per day, at your own pace.\n",
                trip.duration - 1
            ));
        }
        days.push_str(&format!(
            "**Day {}:** Pack, squeeze in one last stop, and depart.\n",
            trip.duration
        ));
    }

    format!(
        "### ⚠️ API Rate Limit Exceeded\n\n\
         The generation service is receiving too many requests right now. \
         Here's a rough {}-day framework to start from:\n\n\
         {}\n\
         **Budget level:** {}\n\
         **Interests to weave in:** {}\n\n\
         Please try again in a few minutes for a fully personalized itinerary.",
        trip.duration, days, trip.budget, trip.interests,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_delays_grow_and_stay_bounded() {
        let base = Duration::from_secs(2);
        for _ in 0..50 {
            let mut previous = Duration::ZERO;
            for attempt in 0..4 {
                let delay = backoff_delay(base, attempt);
                let floor = base * 2u32.pow(attempt);
                assert!(delay >= floor, "delay below backoff floor");
                assert!(
                    delay < floor + Duration::from_secs(1),
                    "jitter exceeded one second"
                );
                assert!(delay > previous, "delays must strictly increase");
                previous = delay;
            }
        }
    }

    #[test]
    fn rate_limit_skeleton_has_no_degenerate_day_ranges() {
        let mut trip = crate::message::TripRequest {
            location: "Chennai".to_string(),
            duration: 1,
            budget: crate::message::Budget::Low,
            interests: "temples".to_string(),
            accommodation: crate::message::Accommodation::Budget,
            additional_notes: None,
        };

        let message = rate_limit_message(&trip);
        assert!(!message.contains("Days 2-0"));
        assert!(message.contains("Day 1"));

        trip.duration = 2;
        let message = rate_limit_message(&trip);
        assert!(!message.contains("Days 2-1"));
        assert!(message.contains("Day 2"));
    }
}
