use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A live game room.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoomSummary {
    pub room_id: String,
    pub owner_id: i64,
    pub players: Vec<i64>,
    pub started: bool,
    pub finished: bool,
    pub entry_fee: i64,
    pub max_players: u32,
}

/// A completed match from the history table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub id: i64,
    pub room_id: String,
    pub players: Vec<i64>,
    pub winners: Vec<i64>,
    pub entry_fee: i64,
    pub total_pot: i64,
    pub bonus: i64,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ForceEndResult {
    pub status: String,
    pub room_id: String,
    pub refunded: bool,
}
