#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use ludo_api::AdminAccount;
    use ludo_types::AdminRole;
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, Default)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
        #[serde(default)]
        pub auth: AuthConfig,
        #[serde(default)]
        pub store: StoreConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        #[serde(default = "default_bind")]
        pub bind: String,
        #[serde(default = "default_port")]
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct AuthConfig {
        #[serde(default = "default_jwt_secret")]
        pub jwt_secret: String,
        #[serde(default = "default_expire_minutes")]
        pub token_expire_minutes: i64,
        #[serde(default)]
        pub admins: Vec<AdminEntry>,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct AdminEntry {
        pub username: String,
        pub password: String,
        #[serde(default)]
        pub role: AdminRole,
    }

    #[derive(Deserialize, Clone, Debug, Default)]
    pub struct StoreConfig {
        /// JSON seed file; demo data when absent.
        pub seed: Option<String>,
    }

    fn default_bind() -> String {
        "127.0.0.1".into()
    }

    fn default_port() -> u16 {
        8000
    }

    fn default_jwt_secret() -> String {
        "change-me-on-first-run".into()
    }

    fn default_expire_minutes() -> i64 {
        60
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: default_bind(),
                port: default_port(),
            }
        }
    }

    impl Default for AuthConfig {
        fn default() -> Self {
            Self {
                jwt_secret: default_jwt_secret(),
                token_expire_minutes: default_expire_minutes(),
                admins: Vec::new(),
            }
        }
    }

    impl Config {
        /// Configured admins, or the stock `admin` owner when none are listed.
        pub fn admin_accounts(&self) -> Vec<AdminAccount> {
            if self.auth.admins.is_empty() {
                tracing::warn!("no admins configured, allowing default admin/admin123");
                return vec![AdminAccount {
                    username: "admin".into(),
                    password: "admin123".into(),
                    role: AdminRole::Owner,
                }];
            }

            self.auth
                .admins
                .iter()
                .map(|a| AdminAccount {
                    username: a.username.clone(),
                    password: a.password.clone(),
                    role: a.role,
                })
                .collect()
        }
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn empty_file_uses_defaults() {
            let config = parse("").unwrap();
            assert_eq!(config.server.port, 8000);
            assert_eq!(config.auth.token_expire_minutes, 60);
            assert!(config.store.seed.is_none());

            let admins = config.admin_accounts();
            assert_eq!(admins.len(), 1);
            assert_eq!(admins[0].username, "admin");
        }

        #[test]
        fn admins_and_roles() {
            let config = parse(
                r#"
                [server]
                bind = "0.0.0.0"
                port = 9000

                [auth]
                jwt_secret = "s3cret"
                token_expire_minutes = 15

                [[auth.admins]]
                username = "root"
                password = "pw"

                [[auth.admins]]
                username = "helper"
                password = "pw2"
                role = "moderator"

                [store]
                seed = "seed.json"
                "#,
            )
            .unwrap();

            assert_eq!(config.server.bind, "0.0.0.0");
            assert_eq!(config.auth.token_expire_minutes, 15);
            assert_eq!(config.store.seed.as_deref(), Some("seed.json"));

            let admins = config.admin_accounts();
            assert_eq!(admins[0].role, AdminRole::Owner);
            assert_eq!(admins[1].role, AdminRole::Moderator);
        }

        #[test]
        fn partial_sections_keep_field_defaults() {
            let config = parse(
                r#"
                [server]
                port = 9100

                [[auth.admins]]
                username = "root"
                password = "pw"
                "#,
            )
            .unwrap();

            assert_eq!(config.server.bind, "127.0.0.1");
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.auth.jwt_secret, AuthConfig::default().jwt_secret);
            assert_eq!(config.auth.token_expire_minutes, 60);

            let admins = config.admin_accounts();
            assert_eq!(admins.len(), 1);
            assert_eq!(admins[0].username, "root");
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::net::SocketAddr;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use ludo_api::{AppState, TokenService};
    use ludo_store::{AdminStore, Seed};
    use ludo_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}",
        appConfig.server.bind,
        appConfig.server.port
    );

    let seed = match &appConfig.store.seed {
        Some(path) => Seed::load(path).await.unwrap_or_else(|e| {
            tracing::warn!("{e}, using demo data");
            Seed::demo()
        }),
        None => Seed::demo(),
    };

    let appState = AppState::new(
        AdminStore::new(seed),
        TokenService::new(&appConfig.auth.jwt_secret, appConfig.auth.token_expire_minutes),
        appConfig.admin_accounts(),
    );

    // Get Leptos configuration
    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port)
        .parse::<SocketAddr>()
        .unwrap_or_else(|e| {
            tracing::warn!("invalid bind address in config: {e}, using {}", leptosOptions.site_addr);
            leptosOptions.site_addr
        });

    let routes = generate_route_list(App);
    let apiRouter = ludo_api::api_router(appState);

    // Pages and static files carry LeptosOptions as state; the API router
    // already has its own state applied.
    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
