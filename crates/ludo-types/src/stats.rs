use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    pub users: UserCounts,
    pub economy: EconomyStats,
    pub games: GameCounts,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct UserCounts {
    pub total: u64,
    pub banned: u64,
    pub active: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct EconomyStats {
    pub total_coins: i64,
    pub transactions: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct GameCounts {
    pub active_rooms: u64,
    pub matches_played: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub bot_running: bool,
    pub admin_panel: bool,
    pub active_rooms: u64,
    pub status: String,
}
