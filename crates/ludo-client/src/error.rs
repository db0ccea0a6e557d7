use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The login response carried no access token.
    #[error("Login failed")]
    LoginFailed,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("token storage unavailable: {0}")]
    Storage(String),
}
