//! The console's single API client, bound to browser storage.

#[cfg(feature = "hydrate")]
use ludo_client::{AdminClient, LocalStorageTokenStore, DEFAULT_API_ORIGIN};

/// The API is served from the same origin as the pages. Outside a page
/// context this falls back to the local default.
#[cfg(feature = "hydrate")]
pub fn console_client() -> AdminClient<LocalStorageTokenStore> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());
    AdminClient::new(origin, LocalStorageTokenStore::new())
}
