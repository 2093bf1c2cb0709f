// src/state.rs
use std::sync::Arc;

use anyhow::Context;

use crate::config::PlannerConfig;
use crate::services::gemini::{GeminiClient, GenerateText};
use crate::services::itinerary_generator::ItineraryGenerator;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub planner: ItineraryGenerator,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn from_config(config: &PlannerConfig) -> anyhow::Result<Self> {
        let transport = match &config.api_key {
            Some(key) => {
                let client = GeminiClient::new(key.clone(), config)
                    .context("failed to build Gemini client")?;
                Some(Arc::new(client) as Arc<dyn GenerateText>)
            }
            None => None,
        };

        Ok(Self {
            planner: ItineraryGenerator::new(transport, config),
            metrics: MetricsManager::new(),
        })
    }
}
