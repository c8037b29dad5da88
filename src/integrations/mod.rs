//! Integration keys and the simulated sync for GitHub, Slack, Notion and Jira.
mod service;
mod store;

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileKeyStore;
pub use service::{
    IntegrationAuthResponse, IntegrationService, IntegrationStatusEntry, SyncResponse,
};
pub use store::{KeyMap, KeyStore, MemoryKeyStore, STORAGE_KEY, parse_key_map};
