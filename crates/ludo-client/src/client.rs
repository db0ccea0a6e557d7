use ludo_types::{LoginRequest, TokenResponse};
use reqwest::{header, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::storage::TokenStore;

/// Origin of a locally running admin API.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Admin console requests against one API origin. Every call is a single
/// round trip: no retries, no timeouts beyond the platform's own.
pub struct AdminClient<S> {
    http: reqwest::Client,
    origin: String,
    store: S,
}

impl<S: TokenStore> AdminClient<S> {
    pub fn new(origin: impl Into<String>, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Posts credentials; stores the returned access token when present.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post(self.url("/login")).json(&body).send().await?;
        debug!("POST /login -> {}", response.status());
        let bytes = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&bytes).map_err(|e| {
            debug!("login response is not JSON: {e}");
            ClientError::LoginFailed
        })?;

        let accessToken = payload
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or(ClientError::LoginFailed)?;

        self.store.save(accessToken)?;

        Ok(TokenResponse {
            access_token: accessToken.to_string(),
            token_type: payload
                .get("token_type")
                .and_then(Value::as_str)
                .unwrap_or("bearer")
                .to_string(),
        })
    }

    /// Forgets the stored token. The token itself stays valid until it expires.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.store.clear()
    }

    pub async fn stats(&self) -> Result<Value, ClientError> {
        self.get("/stats", &[]).await
    }

    pub async fn health(&self) -> Result<Value, ClientError> {
        self.get("/stats/health", &[]).await
    }

    /// `uid` is sent as typed; the server decides what it means.
    pub async fn search_users(&self, uid: &str) -> Result<Value, ClientError> {
        self.get("/users/search", &[("user_id", uid.to_string())]).await
    }

    pub async fn active_games(&self) -> Result<Value, ClientError> {
        self.get("/games/active", &[]).await
    }

    pub async fn match_history(&self, limit: usize) -> Result<Value, ClientError> {
        self.get("/games/history", &[("limit", limit.to_string())]).await
    }

    pub async fn ban_user(&self, userId: i64) -> Result<Value, ClientError> {
        self.post("/users/ban", &[("user_id", userId.to_string())]).await
    }

    pub async fn unban_user(&self, userId: i64) -> Result<Value, ClientError> {
        self.post("/users/unban", &[("user_id", userId.to_string())]).await
    }

    pub async fn add_coins(&self, userId: i64, amount: i64) -> Result<Value, ClientError> {
        let query = [("user_id", userId.to_string()), ("amount", amount.to_string())];
        self.post("/users/add-coins", &query).await
    }

    pub async fn remove_coins(&self, userId: i64, amount: i64) -> Result<Value, ClientError> {
        let query = [("user_id", userId.to_string()), ("amount", amount.to_string())];
        self.post("/users/remove-coins", &query).await
    }

    pub async fn force_end_game(&self, roomId: &str, refund: bool) -> Result<Value, ClientError> {
        let query = [("room_id", roomId.to_string()), ("refund", refund.to_string())];
        self.post("/games/force-end", &query).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ClientError> {
        let request = self.http.get(self.url(path)).query(query);
        self.send_authorized("GET", path, request).await
    }

    async fn post(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ClientError> {
        let request = self.http.post(self.url(path)).query(query);
        self.send_authorized("POST", path, request).await
    }

    /// The JSON body is returned whatever the status, so an auth error body
    /// renders in its panel like any other response.
    async fn send_authorized(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Value, ClientError> {
        let request = match self.store.load() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => {
                debug!("{method} {path} without a stored token");
                request
            }
        };

        let response = request.send().await?;
        debug!("{method} {path} -> {}", response.status());
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
