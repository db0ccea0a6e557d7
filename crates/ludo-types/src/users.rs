use serde::{Deserialize, Serialize};

/// A player as shown in the admin user search.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub user_id: i64,
    pub username: Option<String>,
    pub coins: i64,
    pub wins: u32,
    pub losses: u32,
    pub is_banned: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModerationResult {
    /// `"banned"` or `"unbanned"`.
    pub status: String,
    pub user_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CoinsAdded {
    pub status: String,
    pub user_id: i64,
    pub added: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CoinsRemoved {
    pub status: String,
    pub user_id: i64,
    pub removed: i64,
}
