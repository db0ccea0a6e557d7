use ludo_api::{api_router, AdminAccount, AppState, TokenService};
use ludo_client::{render_json, AdminClient, ClientError, MemoryTokenStore, TokenStore};
use ludo_store::{AdminStore, Seed};
use ludo_types::AdminRole;
use serde_json::json;

/// Serves the admin API on an ephemeral port and returns its origin.
async fn spawn_api() -> String {
    let state = AppState::new(
        AdminStore::new(Seed::demo()),
        TokenService::new("console-test-secret", 60),
        vec![AdminAccount {
            username: "admin".into(),
            password: "admin123".into(),
            role: AdminRole::Owner,
        }],
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_router(state)).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn login_stores_token() {
    let store = MemoryTokenStore::new();
    let client = AdminClient::new(spawn_api().await, store.clone());

    let token = client.login("admin", "admin123").await.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert_eq!(store.load(), Some(token.access_token));
}

#[tokio::test]
async fn bad_login_fails_and_keeps_previous_token() {
    let store = MemoryTokenStore::with_token("old-token");
    let client = AdminClient::new(spawn_api().await, store.clone());

    let result = client.login("admin", "nope").await;
    assert!(matches!(result, Err(ClientError::LoginFailed)));
    assert_eq!(result.unwrap_err().to_string(), "Login failed");
    assert_eq!(store.load().as_deref(), Some("old-token"));
}

#[tokio::test]
async fn panels_render_after_login() {
    let client = AdminClient::new(spawn_api().await, MemoryTokenStore::new());
    client.login("admin", "admin123").await.unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats["users"]["total"], 4);
    assert!(render_json(&stats).starts_with("{\n  \""));

    let users = client.search_users("100001").await.unwrap();
    assert_eq!(users[0]["username"], "ravi_k");

    let games = client.active_games().await.unwrap();
    assert_eq!(games[0]["room_id"], "c93a55f1");
}

#[tokio::test]
async fn search_input_is_sent_as_one_value() {
    let client = AdminClient::new(spawn_api().await, MemoryTokenStore::new());
    client.login("admin", "admin123").await.unwrap();

    // A raw `&` must not split into a second query parameter.
    let body = client.search_users("100001&username=x").await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("100001&username=x"), "{detail}");

    let spaced = client.search_users("ravi k").await.unwrap();
    assert!(spaced["detail"].as_str().unwrap().contains("ravi k"));
}

#[tokio::test]
async fn unauthorized_body_is_still_rendered() {
    let client = AdminClient::new(spawn_api().await, MemoryTokenStore::new());

    let stats = client.stats().await.unwrap();
    assert_eq!(stats, json!({ "detail": "Invalid or expired token" }));

    let stale = AdminClient::new(client.origin().to_string(), MemoryTokenStore::with_token("null"));
    assert_eq!(stale.active_games().await.unwrap()["detail"], "Invalid or expired token");
}

#[tokio::test]
async fn owner_actions_round_trip() {
    let client = AdminClient::new(spawn_api().await, MemoryTokenStore::new());
    client.login("admin", "admin123").await.unwrap();

    let banned = client.ban_user(100002).await.unwrap();
    assert_eq!(banned["status"], "banned");
    assert_eq!(client.unban_user(100002).await.unwrap()["status"], "unbanned");

    assert_eq!(client.add_coins(100002, 20).await.unwrap()["added"], 20);
    let rejected = client.remove_coins(100004, 5).await.unwrap();
    assert_eq!(rejected["detail"], "Insufficient balance");

    let ended = client.force_end_game("c93a55f1", false).await.unwrap();
    assert_eq!(ended["status"], "ended");
    assert_eq!(client.active_games().await.unwrap(), json!([]));

    let history = client.match_history(1).await.unwrap();
    assert_eq!(history.as_array().map(Vec::len), Some(1));
    assert_eq!(client.health().await.unwrap()["active_rooms"], 0);
}

#[tokio::test]
async fn logout_clears_token() {
    let store = MemoryTokenStore::new();
    let client = AdminClient::new(spawn_api().await, store.clone());
    client.login("admin", "admin123").await.unwrap();

    client.logout().unwrap();
    assert_eq!(client.token(), None);
    assert_eq!(client.stats().await.unwrap()["detail"], "Invalid or expired token");
}

#[tokio::test]
async fn unreachable_origin_is_an_http_error() {
    let client = AdminClient::new("http://127.0.0.1:1", MemoryTokenStore::new());
    assert!(matches!(client.stats().await, Err(ClientError::Http(_))));
}
