// src/message.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One trip submission. Immutable once received; each request is independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub location: String,
    /// Trip length in days, 1 through 15 (validated in the handler).
    pub duration: u8,
    pub budget: Budget,
    pub interests: String,
    pub accommodation: Accommodation,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl TripRequest {
    /// Field summary used for the clarification prompt.
    pub fn summary(&self) -> String {
        format!(
            "Location: {}\nDuration: {} days\nBudget: {}\nInterests: {}\nAccommodation: {}\nAdditional Notes: {}",
            self.location,
            self.duration,
            self.budget,
            self.interests,
            self.accommodation,
            self.additional_notes.as_deref().unwrap_or("None"),
        )
    }

    pub fn notes_or_default(&self) -> &str {
        self.additional_notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .unwrap_or("No specific requirements noted.")
    }
}

/// Budget bands offered by the form. Values from other clients fall through
/// to `Custom` so they still render with generic advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Budget {
    Low,
    Moderate,
    High,
    Custom(String),
}

impl From<String> for Budget {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Budget::Low,
            "Moderate" => Budget::Moderate,
            "High" => Budget::High,
            _ => Budget::Custom(value),
        }
    }
}

impl From<Budget> for String {
    fn from(value: Budget) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Low => write!(f, "Low"),
            Budget::Moderate => write!(f, "Moderate"),
            Budget::High => write!(f, "High"),
            Budget::Custom(value) => write!(f, "{value}"),
        }
    }
}

/// Accommodation styles offered by the form, with the same `Custom` escape
/// hatch as [`Budget`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Accommodation {
    Luxury,
    Budget,
    MidRange,
    UniqueStays,
    Custom(String),
}

impl From<String> for Accommodation {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Luxury" => Accommodation::Luxury,
            "Budget" => Accommodation::Budget,
            "Mid-range" => Accommodation::MidRange,
            "Unique stays" => Accommodation::UniqueStays,
            _ => Accommodation::Custom(value),
        }
    }
}

impl From<Accommodation> for String {
    fn from(value: Accommodation) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accommodation::Luxury => write!(f, "Luxury"),
            Accommodation::Budget => write!(f, "Budget"),
            Accommodation::MidRange => write!(f, "Mid-range"),
            Accommodation::UniqueStays => write!(f, "Unique stays"),
            Accommodation::Custom(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub trip: TripRequest,
    /// When set, skip the remote API and render the local template.
    #[serde(default)]
    pub use_fallback: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub clarifications: Option<String>,
    pub itinerary: String,
    pub report_url: Option<String>,
    pub tip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_round_trip_through_serde() {
        let accommodation: Accommodation = serde_json::from_str("\"Unique stays\"").unwrap();
        assert_eq!(accommodation, Accommodation::UniqueStays);
        assert_eq!(
            serde_json::to_string(&accommodation).unwrap(),
            "\"Unique stays\""
        );

        let budget: Budget = serde_json::from_str("\"Shoestring\"").unwrap();
        assert_eq!(budget, Budget::Custom("Shoestring".to_string()));
    }

    #[test]
    fn summary_includes_every_field() {
        let trip = TripRequest {
            location: "Kochi".to_string(),
            duration: 5,
            budget: Budget::Moderate,
            interests: "culture, food".to_string(),
            accommodation: Accommodation::MidRange,
            additional_notes: Some("vegetarian meals".to_string()),
        };
        let summary = trip.summary();
        assert!(summary.contains("Kochi"));
        assert!(summary.contains("5 days"));
        assert!(summary.contains("Moderate"));
        assert!(summary.contains("culture, food"));
        assert!(summary.contains("Mid-range"));
        assert!(summary.contains("vegetarian meals"));
    }
}
