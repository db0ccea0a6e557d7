use chrono::Utc;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::{Transaction, User};
use crate::{AdminStore, StoreState};

impl AdminStore {
    pub async fn balance(&self, userId: i64) -> Result<i64, StoreError> {
        let state = self.state.read().await;
        state
            .users
            .get(&userId)
            .map(|u| u.coins)
            .ok_or(StoreError::UserNotFound)
    }

    /// Credits coins. Non-positive amounts are ignored; an unknown id gets a fresh wallet.
    pub async fn add_coins(&self, userId: i64, amount: i64, reason: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        credit(&mut state, userId, amount, reason)
    }

    /// Debits coins. Non-positive amounts are ignored.
    pub async fn deduct_coins(&self, userId: i64, amount: i64, reason: &str) -> Result<(), StoreError> {
        if amount <= 0 {
            debug!("ignoring non-positive debit of {amount} for user {userId}");
            return Ok(());
        }

        let mut state = self.state.write().await;
        let user = state.users.get_mut(&userId).ok_or(StoreError::UserNotFound)?;
        if user.coins < amount {
            return Err(StoreError::InsufficientBalance);
        }
        user.coins -= amount;

        push_transaction(&mut state, userId, -amount, reason);
        info!("debited {amount} from user {userId}: {reason}");
        Ok(())
    }
}

/// Balance after crediting `amount`, without touching the wallet.
pub(crate) fn credited_balance(state: &StoreState, userId: i64, amount: i64) -> Result<i64, StoreError> {
    state
        .users
        .get(&userId)
        .map_or(0, |u| u.coins)
        .checked_add(amount)
        .ok_or(StoreError::BalanceOverflow)
}

pub(crate) fn credit(state: &mut StoreState, userId: i64, amount: i64, reason: &str) -> Result<(), StoreError> {
    if amount <= 0 {
        debug!("ignoring non-positive credit of {amount} for user {userId}");
        return Ok(());
    }

    let balance = credited_balance(state, userId, amount)?;
    state
        .users
        .entry(userId)
        .or_insert_with(|| User::empty(userId))
        .coins = balance;

    push_transaction(state, userId, amount, reason);
    info!("credited {amount} to user {userId}: {reason}");
    Ok(())
}

fn push_transaction(state: &mut StoreState, userId: i64, amount: i64, reason: &str) {
    let id = state.transactions.len() as u64 + 1;
    state.transactions.push(Transaction {
        id,
        user_id: userId,
        amount,
        reason: reason.to_string(),
        created_at: Utc::now(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seed;

    fn store() -> AdminStore {
        AdminStore::new(Seed {
            users: vec![User {
                coins: 100,
                ..User::empty(1)
            }],
            ..Seed::default()
        })
    }

    #[tokio::test]
    async fn credit_creates_unknown_wallet() {
        let store = store();
        store.add_coins(42, 25, "Admin add coins").await.unwrap();
        assert_eq!(store.balance(42).await, Ok(25));
        assert_eq!(store.stats().await.economy.transactions, 1);
    }

    #[tokio::test]
    async fn non_positive_amounts_are_noops() {
        let store = store();
        store.add_coins(1, 0, "zero").await.unwrap();
        store.deduct_coins(1, -5, "negative").await.unwrap();
        assert_eq!(store.balance(1).await, Ok(100));
        assert!(store.transactions_for(1).await.is_empty());
    }

    #[tokio::test]
    async fn credit_overflow_is_rejected() {
        let store = store();
        store.add_coins(2, i64::MAX, "Admin add coins").await.unwrap();

        assert_eq!(
            store.add_coins(2, 1, "Admin add coins").await,
            Err(StoreError::BalanceOverflow)
        );
        assert_eq!(store.balance(2).await, Ok(i64::MAX));
        assert_eq!(store.transactions_for(2).await.len(), 1);

        assert_eq!(
            store.add_coins(1, i64::MAX, "Admin add coins").await,
            Err(StoreError::BalanceOverflow)
        );
        assert_eq!(store.balance(1).await, Ok(100));
    }

    #[tokio::test]
    async fn debit_checks_balance() {
        let store = store();
        assert_eq!(
            store.deduct_coins(1, 101, "too much").await,
            Err(StoreError::InsufficientBalance)
        );
        assert_eq!(
            store.deduct_coins(2, 1, "nobody").await,
            Err(StoreError::UserNotFound)
        );

        store.deduct_coins(1, 60, "Admin remove coins").await.unwrap();
        assert_eq!(store.balance(1).await, Ok(40));
        assert_eq!(store.transactions_for(1).await[0].amount, -60);
    }
}
