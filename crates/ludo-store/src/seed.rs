use chrono::{Duration, Utc};
use ludo_types::{MatchRecord, RoomSummary};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::User;

/// Initial contents of the store.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default)]
    pub rooms: Vec<RoomSummary>,
}

impl Seed {
    pub async fn load(path: &str) -> Result<Seed, StoreError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Seed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&contents).map_err(|e| StoreError::Seed {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Small fixture used when no seed file is configured.
    pub fn demo() -> Seed {
        let now = Utc::now();

        let user = |userId: i64, name: &str, coins: i64, wins: u32, losses: u32, banned: bool| User {
            user_id: userId,
            username: Some(name.to_string()),
            coins,
            total_games: wins + losses,
            wins,
            losses,
            is_banned: banned,
            created_at: now - Duration::days(30),
        };

        Seed {
            users: vec![
                user(100001, "ravi_k", 1250, 14, 9, false),
                user(100002, "meera.plays", 430, 6, 11, false),
                user(100003, "dice_lord", 9800, 52, 20, false),
                user(100004, "shadyshortcut", 0, 3, 1, true),
            ],
            matches: vec![
                MatchRecord {
                    id: 1,
                    room_id: "a1f0c2de".into(),
                    players: vec![100001, 100003],
                    winners: vec![100003],
                    entry_fee: 50,
                    total_pot: 100,
                    bonus: 10,
                    ended_at: Some(now - Duration::hours(5)),
                },
                MatchRecord {
                    id: 2,
                    room_id: "b7d41e09".into(),
                    players: vec![100001, 100002, 100003],
                    winners: vec![100001],
                    entry_fee: 100,
                    total_pot: 300,
                    bonus: 30,
                    ended_at: Some(now - Duration::hours(1)),
                },
            ],
            rooms: vec![RoomSummary {
                room_id: "c93a55f1".into(),
                owner_id: 100002,
                players: vec![100002, 100003],
                started: true,
                finished: false,
                entry_fee: 50,
                max_players: 4,
            }],
        }
    }
}
