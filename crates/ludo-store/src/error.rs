use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("User not found")]
    UserNotFound,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Balance overflow")]
    BalanceOverflow,

    #[error("Room not found")]
    RoomNotFound,

    #[error("failed to load seed {path}: {reason}")]
    Seed { path: String, reason: String },
}
