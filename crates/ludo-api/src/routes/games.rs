use axum::{
    extract::{rejection::QueryRejection, Query, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use ludo_types::{ForceEndResult, MatchRecord, RoomSummary};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::{require_admin, require_owner, AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    let ownerRoutes = Router::new()
        .route("/games/force-end", post(post_force_end))
        .route_layer(middleware::from_fn(require_owner));

    Router::new()
        .route("/games/active", get(get_active_games))
        .route("/games/history", get(get_match_history))
        .merge(ownerRoutes)
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

#[derive(Deserialize)]
struct ForceEndQuery {
    room_id: String,
    #[serde(default)]
    refund: bool,
}

#[derive(Deserialize)]
struct HistoryQuery {
    #[serde(default = "default_history_limit")]
    limit: usize,
}

fn default_history_limit() -> usize {
    20
}

async fn get_active_games(State(state): State<AppState>) -> Json<Vec<RoomSummary>> {
    Json(state.store.active_rooms().await)
}

async fn post_force_end(
    State(state): State<AppState>,
    query: Result<Query<ForceEndQuery>, QueryRejection>,
) -> Result<Json<ForceEndResult>, ApiError> {
    let Query(query) = query?;
    let result = state.store.force_end(&query.room_id, query.refund).await?;
    Ok(Json(result))
}

async fn get_match_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<MatchRecord>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.store.match_history(query.limit).await))
}
