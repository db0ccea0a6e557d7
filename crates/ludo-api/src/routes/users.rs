use axum::{
    extract::{rejection::QueryRejection, Query, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use ludo_types::{CoinsAdded, CoinsRemoved, ModerationResult, UserRecord};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::{require_admin, require_owner, AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    let ownerRoutes = Router::new()
        .route("/users/ban", post(post_ban))
        .route("/users/unban", post(post_unban))
        .route("/users/add-coins", post(post_add_coins))
        .route("/users/remove-coins", post(post_remove_coins))
        .route_layer(middleware::from_fn(require_owner));

    Router::new()
        .route("/users/search", get(get_search))
        .merge(ownerRoutes)
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

/// Raw query of `/users/search`. `user_id` is kept as text so that an empty
/// form field (`?user_id=`) means "no filter" instead of a rejection.
#[derive(Deserialize)]
struct SearchQuery {
    user_id: Option<String>,
    username: Option<String>,
}

#[derive(Deserialize)]
struct UserQuery {
    user_id: i64,
}

#[derive(Deserialize)]
struct CoinsQuery {
    user_id: i64,
    amount: i64,
}

fn parse_user_id(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::Unprocessable(format!("user_id must be an integer, got {value:?}"))),
    }
}

async fn get_search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let Query(query) = query?;
    let userId = parse_user_id(query.user_id.as_deref())?;
    let users = state
        .store
        .search_users(userId, query.username.as_deref())
        .await;
    Ok(Json(users))
}

async fn post_ban(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<ModerationResult>, ApiError> {
    let Query(query) = query?;
    state.store.set_banned(query.user_id, true).await?;
    Ok(Json(ModerationResult {
        status: "banned".into(),
        user_id: query.user_id,
    }))
}

async fn post_unban(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<ModerationResult>, ApiError> {
    let Query(query) = query?;
    state.store.set_banned(query.user_id, false).await?;
    Ok(Json(ModerationResult {
        status: "unbanned".into(),
        user_id: query.user_id,
    }))
}

async fn post_add_coins(
    State(state): State<AppState>,
    query: Result<Query<CoinsQuery>, QueryRejection>,
) -> Result<Json<CoinsAdded>, ApiError> {
    let Query(query) = query?;
    state
        .store
        .add_coins(query.user_id, query.amount, "Admin add coins")
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(CoinsAdded {
        status: "success".into(),
        user_id: query.user_id,
        added: query.amount,
    }))
}

async fn post_remove_coins(
    State(state): State<AppState>,
    query: Result<Query<CoinsQuery>, QueryRejection>,
) -> Result<Json<CoinsRemoved>, ApiError> {
    let Query(query) = query?;
    state
        .store
        .deduct_coins(query.user_id, query.amount, "Admin remove coins")
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(CoinsRemoved {
        status: "success".into(),
        user_id: query.user_id,
        removed: query.amount,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_user_id_is_no_filter() {
        assert_eq!(parse_user_id(None).unwrap(), None);
        assert_eq!(parse_user_id(Some("")).unwrap(), None);
        assert_eq!(parse_user_id(Some(" 42 ")).unwrap(), Some(42));
        assert!(matches!(parse_user_id(Some("abc")), Err(ApiError::Unprocessable(_))));
    }
}
