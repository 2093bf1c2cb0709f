// src/routes/mod.rs
pub mod plan;

use crate::state::SharedState;
use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use plan::{get_metrics_handler, plan_handler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn(auth_middleware));

    Router::new()
        .route("/plan", post(plan_handler))
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

async fn auth_middleware(req: Request, next: Next) -> Result<Response, StatusCode> {
    // Admin key check. Requests are rejected outright while ADMIN_KEY is unset.
    let expected = std::env::var("ADMIN_KEY").ok().filter(|key| !key.is_empty());
    match (expected, req.headers().get("x-admin-key")) {
        (Some(key), Some(value)) if value.as_bytes() == key.as_bytes() => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
