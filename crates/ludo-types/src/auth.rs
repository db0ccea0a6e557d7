use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(accessToken: String) -> Self {
        Self {
            access_token: accessToken,
            token_type: bearer(),
        }
    }
}

fn bearer() -> String {
    "bearer".into()
}

/// Admin permission level. Owners may change state, moderators only read.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    #[default]
    Owner,
    Moderator,
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminRole::Owner => f.write_str("owner"),
            AdminRole::Moderator => f.write_str("moderator"),
        }
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(AdminRole::Owner),
            "moderator" => Ok(AdminRole::Moderator),
            other => Err(format!("unknown admin role: {other}")),
        }
    }
}

/// Payload carried inside an access token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminClaims {
    pub username: String,
    pub role: AdminRole,
    /// Expiry as a unix timestamp in seconds.
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_type_defaults_to_bearer() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(parsed.token_type, "bearer");
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Owner".parse::<AdminRole>(), Ok(AdminRole::Owner));
        assert_eq!(" moderator ".parse::<AdminRole>(), Ok(AdminRole::Moderator));
        assert!("root".parse::<AdminRole>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&AdminRole::Moderator).unwrap();
        assert_eq!(json, r#""moderator""#);
    }
}
