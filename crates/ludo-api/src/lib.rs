#![allow(non_snake_case)]

pub mod error;
pub mod middleware;
pub mod routes;
pub mod token;

use axum::Router;
use tower_http::cors::CorsLayer;

pub use crate::error::ApiError;
pub use crate::middleware::auth::{AdminAccount, AppState};
pub use crate::token::TokenService;

/// Every admin API route, with its state applied. Cross-origin requests are
/// allowed so a console served from another origin can reach the API.
pub fn api_router(state: AppState) -> Router {
    let apiRoutes = routes::api_routes(state.clone());
    let authRoutes = middleware::auth::auth_routes(state.clone());

    Router::new()
        .merge(apiRoutes)
        .merge(authRoutes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
