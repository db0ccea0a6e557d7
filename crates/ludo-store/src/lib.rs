#![allow(non_snake_case)]

pub mod error;
pub mod models;
pub mod seed;
pub mod wallet;

use std::collections::BTreeMap;
use std::sync::Arc;

use ludo_types::{
    DashboardStats, EconomyStats, ForceEndResult, GameCounts, HealthStatus, MatchRecord,
    RoomSummary, UserCounts, UserRecord,
};
use tokio::sync::RwLock;
use tracing::info;

pub use error::StoreError;
pub use models::{Transaction, User};
pub use seed::Seed;

/// Maximum rows returned by a user search.
pub const SEARCH_LIMIT: usize = 20;

#[derive(Default)]
struct StoreState {
    users: BTreeMap<i64, User>,
    transactions: Vec<Transaction>,
    matches: Vec<MatchRecord>,
    rooms: BTreeMap<String, RoomSummary>,
}

/// Shared handle to the admin data. Cloning is cheap; all clones see the same state.
#[derive(Clone, Default)]
pub struct AdminStore {
    state: Arc<RwLock<StoreState>>,
}

impl AdminStore {
    pub fn new(seed: Seed) -> Self {
        let mut state = StoreState::default();
        for user in seed.users {
            state.users.insert(user.user_id, user);
        }
        state.matches = seed.matches;
        for room in seed.rooms {
            state.rooms.insert(room.room_id.clone(), room);
        }

        info!(
            "store seeded: {} users, {} matches, {} rooms",
            state.users.len(),
            state.matches.len(),
            state.rooms.len()
        );

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Filters combine with AND. A `user_id` of 0 and an empty username are ignored.
    pub async fn search_users(&self, userId: Option<i64>, username: Option<&str>) -> Vec<UserRecord> {
        let state = self.state.read().await;
        let needle = username
            .filter(|name| !name.is_empty())
            .map(|name| name.to_lowercase());

        state
            .users
            .values()
            .filter(|u| match userId {
                Some(id) if id != 0 => u.user_id == id,
                _ => true,
            })
            .filter(|u| match &needle {
                Some(n) => u
                    .username
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(n.as_str())),
                None => true,
            })
            .take(SEARCH_LIMIT)
            .map(User::to_record)
            .collect()
    }

    pub async fn set_banned(&self, userId: i64, banned: bool) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(&userId).ok_or(StoreError::UserNotFound)?;
        user.is_banned = banned;
        info!("user {userId} banned={banned}");
        Ok(())
    }

    pub async fn active_rooms(&self) -> Vec<RoomSummary> {
        self.state.read().await.rooms.values().cloned().collect()
    }

    pub async fn insert_room(&self, room: RoomSummary) {
        self.state
            .write()
            .await
            .rooms
            .insert(room.room_id.clone(), room);
    }

    /// Stops a room and drops it from the live set, optionally refunding every player's fee.
    pub async fn force_end(&self, roomId: &str, refund: bool) -> Result<ForceEndResult, StoreError> {
        let mut state = self.state.write().await;
        let room = state.rooms.get(roomId).ok_or(StoreError::RoomNotFound)?;

        // All refunds must fit before any is paid, so a failure leaves the room untouched.
        if refund {
            for playerId in &room.players {
                wallet::credited_balance(&state, *playerId, room.entry_fee)?;
            }
        }

        let Some(mut room) = state.rooms.remove(roomId) else {
            return Err(StoreError::RoomNotFound);
        };
        room.finished = true;

        if refund {
            for playerId in &room.players {
                wallet::credit(&mut state, *playerId, room.entry_fee, "Admin refund (force end)")?;
            }
        }

        info!("room {roomId} force-ended, refund={refund}");

        Ok(ForceEndResult {
            status: "ended".into(),
            room_id: room.room_id,
            refunded: refund,
        })
    }

    /// Most recently ended matches first. Matches without an end time sort last.
    pub async fn match_history(&self, limit: usize) -> Vec<MatchRecord> {
        let state = self.state.read().await;
        let mut matches = state.matches.clone();
        matches.sort_by(|a, b| b.ended_at.cmp(&a.ended_at));
        matches.truncate(limit);
        matches
    }

    pub async fn stats(&self) -> DashboardStats {
        let state = self.state.read().await;
        let total = state.users.len() as u64;
        let banned = state.users.values().filter(|u| u.is_banned).count() as u64;

        DashboardStats {
            users: UserCounts {
                total,
                banned,
                active: total - banned,
            },
            economy: EconomyStats {
                total_coins: state
                    .users
                    .values()
                    .fold(0i64, |total, u| total.saturating_add(u.coins)),
                transactions: state.transactions.len() as u64,
            },
            games: GameCounts {
                active_rooms: state.rooms.len() as u64,
                matches_played: state.matches.len() as u64,
            },
            status: "ok".into(),
        }
    }

    pub async fn health(&self) -> HealthStatus {
        HealthStatus {
            bot_running: true,
            admin_panel: true,
            active_rooms: self.state.read().await.rooms.len() as u64,
            status: "healthy".into(),
        }
    }

    pub async fn transactions_for(&self, userId: i64) -> Vec<Transaction> {
        self.state
            .read()
            .await
            .transactions
            .iter()
            .filter(|t| t.user_id == userId)
            .cloned()
            .collect()
    }
}
