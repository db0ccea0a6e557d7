use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use ludo_store::AdminStore;
use ludo_types::{AdminClaims, AdminRole, LoginRequest, TokenResponse};

use crate::error::ApiError;
use crate::token::TokenService;

/// An admin allowed to sign in to the panel.
#[derive(Clone, Debug)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub role: AdminRole,
}

#[derive(Clone)]
pub struct AppState {
    pub store: AdminStore,
    pub tokens: Arc<TokenService>,
    pub admins: Arc<Vec<AdminAccount>>,
}

impl AppState {
    pub fn new(store: AdminStore, tokens: TokenService, admins: Vec<AdminAccount>) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            admins: Arc::new(admins),
        }
    }

    fn authenticate(&self, username: &str, password: &str) -> Option<&AdminAccount> {
        self.admins
            .iter()
            .find(|a| a.username == username && a.password == password)
    }
}

pub fn auth_routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/login", post(handle_login))
}

async fn handle_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(body) = body?;
    let Some(admin) = state.authenticate(&body.username, &body.password) else {
        tracing::warn!("failed login for {:?}", body.username);
        return Err(ApiError::InvalidCredentials);
    };

    let accessToken = state.tokens.issue(&admin.username, admin.role)?;
    tracing::info!("admin {} signed in as {}", admin.username, admin.role);

    Ok(Json(TokenResponse::bearer(accessToken)))
}

/// Middleware for every protected route: checks `Authorization: Bearer <token>` and
/// stores the decoded claims as a request extension.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token);

    let claims = match bearer.map(|token| state.tokens.validate(token.trim())) {
        Some(Ok(claims)) => claims,
        Some(Err(e)) => return e.into_response(),
        None => return ApiError::Unauthorized.into_response(),
    };

    request.extensions_mut().insert(claims);
    next.run(request).await
}

/// Middleware for state-changing routes. Must sit inside `require_admin`.
pub async fn require_owner(request: Request<Body>, next: Next) -> Response {
    let isOwner = request
        .extensions()
        .get::<AdminClaims>()
        .is_some_and(|claims| claims.role == AdminRole::Owner);

    if !isOwner {
        return ApiError::OwnerRequired.into_response();
    }

    next.run(request).await
}
