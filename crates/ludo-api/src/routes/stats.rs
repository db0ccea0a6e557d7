use axum::{extract::State, middleware, routing::get, Json, Router};
use ludo_types::{DashboardStats, HealthStatus};

use crate::middleware::auth::{require_admin, AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_dashboard_stats))
        .route("/stats/", get(get_dashboard_stats))
        .route("/stats/health", get(get_health))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

async fn get_dashboard_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(state.store.stats().await)
}

async fn get_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.store.health().await)
}
