use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Counters for how itineraries are being produced.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    /// Total submissions handled.
    pub requests: u64,
    /// "basic" vs "ai".
    pub mode_usage: HashMap<String, u64>,
    /// Remote outcomes: success, rate_limited, failed, not_configured.
    pub outcome_usage: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl MetricsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_mode(&self, mode: &str) {
        let mut data = self.inner.write().await;
        data.requests += 1;
        *data.mode_usage.entry(mode.to_string()).or_insert(0) += 1;
    }

    pub async fn record_outcome(&self, outcome: &str) {
        let mut data = self.inner.write().await;
        *data.outcome_usage.entry(outcome.to_string()).or_insert(0) += 1;
    }

    pub async fn snapshot(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counters_accumulate() {
        let metrics = MetricsManager::new();
        metrics.record_mode("basic").await;
        metrics.record_mode("ai").await;
        metrics.record_mode("ai").await;
        metrics.record_outcome("success").await;

        let data = metrics.snapshot().await;
        assert_eq!(data.requests, 3);
        assert_eq!(data.mode_usage.get("ai"), Some(&2));
        assert_eq!(data.outcome_usage.get("success"), Some(&1));
    }
}
