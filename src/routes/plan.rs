use axum::{Json, extract::State};
use tracing::warn;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{PlanRequest, PlanResponse, TripRequest},
    services::{report_generator::generate_pdf_report, template::render_basic_itinerary},
    state::SharedState,
};
use crate::services::metrics_manager::MetricsData;

/// Markers the diagnostics embed; used to detect a degraded reply the same
/// way the form UI does.
const DIAGNOSTIC_MARKERS: [&str; 3] = ["API Rate Limit", "Error", "API Key Not Configured"];

const BASIC_MODE_TIP: &str =
    "💡 Tip: You can enable basic mode for a template itinerary that doesn't require the API.";

pub async fn plan_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    validate(&payload.trip)?;
    let trip = payload.trip;

    if payload.use_fallback {
        state.metrics.record_mode("basic").await;
        let itinerary = render_basic_itinerary(&trip);
        let report_url = render_report(&trip, &itinerary).await;
        return Ok(Json(PlanResponse {
            clarifications: None,
            itinerary,
            report_url,
            tip: None,
        }));
    }

    state.metrics.record_mode("ai").await;
    let clarifications = state.planner.refine_inputs(&trip.summary()).await;
    let itinerary = state
        .planner
        .generate_itinerary(&trip, &state.metrics)
        .await;

    let degraded = DIAGNOSTIC_MARKERS
        .iter()
        .any(|marker| itinerary.contains(marker));
    let report_url = if degraded {
        None
    } else {
        render_report(&trip, &itinerary).await
    };

    Ok(Json(PlanResponse {
        clarifications: Some(clarifications),
        itinerary,
        report_url,
        tip: degraded.then(|| BASIC_MODE_TIP.to_string()),
    }))
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.snapshot().await)
}

fn validate(trip: &TripRequest) -> Result<(), AppError> {
    if trip.location.trim().is_empty() {
        return Err(AppError::BadRequest("Location cannot be empty".to_string()));
    }
    if trip.interests.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Interests cannot be empty".to_string(),
        ));
    }
    if !(1..=15).contains(&trip.duration) {
        return Err(AppError::BadRequest(
            "Duration must be between 1 and 15 days".to_string(),
        ));
    }
    Ok(())
}

/// A failed report never fails the request; the link is simply omitted.
async fn render_report(trip: &TripRequest, itinerary: &str) -> Option<String> {
    match generate_pdf_report(&Uuid::new_v4().to_string(), trip, itinerary).await {
        Ok(url) => Some(url),
        Err(err) => {
            warn!(error = %err, "report generation failed");
            None
        }
    }
}
