use chrono::{DateTime, Utc};
use ludo_types::UserRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// A fresh wallet-only user, as created when coins are credited to an unknown id.
    pub fn empty(userId: i64) -> Self {
        Self {
            user_id: userId,
            username: None,
            coins: 0,
            total_games: 0,
            wins: 0,
            losses: 0,
            is_banned: false,
            created_at: Utc::now(),
        }
    }

    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            user_id: self.user_id,
            username: self.username.clone(),
            coins: self.coins,
            wins: self.wins,
            losses: self.losses,
            is_banned: self.is_banned,
        }
    }
}

/// One wallet movement. Credits are positive, debits negative.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub user_id: i64,
    pub amount: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
