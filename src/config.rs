// src/config.rs
use std::time::Duration;

/// Persona prompt sent with every remote generation request.
pub const SYSTEM_PROMPT: &str = "\
You are an intelligent travel assistant. Your role is to help users create personalized travel itineraries.
Follow these steps:
1. Ask relevant follow-up questions to gather detailed user input.
2. Refine user inputs to address missing or unclear details.
3. Generate a structured, day-by-day travel itinerary.
Include:
- Attractions and activities aligned with preferences.
- Dining options and local experiences.
- Suggested accommodations and travel tips.";

/// Process-wide configuration, loaded once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Google API key. Remote generation stays disabled while this is `None`.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub port: u16,
    /// Total attempts for one generation call, including the first.
    pub max_attempts: u32,
    /// Base delay for the exponential backoff between rate-limited attempts.
    pub base_delay: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            port: 3000,
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl PlannerConfig {
    /// Read configuration from the environment. Call after `dotenvy::dotenv()`.
    ///
    /// A missing or empty `GOOGLE_API_KEY` is a valid state, not an error:
    /// the remote path is disabled and the fallback template still works.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("GOOGLE_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            max_attempts: defaults.max_attempts,
            base_delay: defaults.base_delay,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-pro-latest".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
