use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use trip_planner_backend::config::PlannerConfig;
use trip_planner_backend::routes;
use trip_planner_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = PlannerConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY not set, remote generation disabled");
    }

    let state = Arc::new(AppState::from_config(&config)?);

    let cors = CorsLayer::very_permissive();

    let app: Router = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    println!(
        "🚀 Trip planner running at http://localhost:{}",
        config.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}
