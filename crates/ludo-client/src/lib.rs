#![allow(non_snake_case)]

pub mod client;
pub mod error;
pub mod render;
pub mod storage;

pub use client::{AdminClient, DEFAULT_API_ORIGIN};
pub use error::ClientError;
pub use render::{render_json, render_result};
#[cfg(feature = "browser")]
pub use storage::LocalStorageTokenStore;
pub use storage::{MemoryTokenStore, TokenStore, TOKEN_STORAGE_KEY};
