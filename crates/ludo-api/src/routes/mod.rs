pub mod games;
pub mod stats;
pub mod users;

use axum::{routing::get, Json, Router};
use ludo_types::ServiceInfo;

use crate::middleware::auth::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/info", get(get_service_info))
        .merge(stats::routes(state.clone()))
        .merge(users::routes(state.clone()))
        .merge(games::routes(state))
}

async fn get_service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "ok".into(),
        service: "Ludo Admin Panel".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
