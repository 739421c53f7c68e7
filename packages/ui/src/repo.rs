//! Shared store and storage constructors for all platforms.
//!
//! - **Web** (WASM + `web` feature): session in `localStorage` via [`store::BrowserStorage`]
//! - **Native**: a process-wide [`store::MemoryStorage`]
//!
//! The bills store follows [`store::BilledConfig`]: a configured base url gives
//! an [`store::HttpStore`], otherwise every caller shares one offline
//! [`store::MemoryStore`] so bills created on one page show up on the next.

use std::sync::OnceLock;

use store::{AppStore, BilledConfig, HttpStore, MemoryStore, Session};

/// Create the platform session storage.
pub fn make_storage() -> impl store::KeyValueStorage + Clone + 'static {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::BrowserStorage
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static STORAGE: OnceLock<store::MemoryStorage> = OnceLock::new();
        STORAGE.get_or_init(store::MemoryStorage::new).clone()
    }
}

/// Session over the platform storage.
pub fn make_session() -> Session<impl store::KeyValueStorage + Clone + 'static> {
    Session::new(make_storage())
}

/// Create the bills store selected by `config`.
pub fn make_store(config: &BilledConfig) -> AppStore {
    if config.uses_backend() {
        let token = make_session().token();
        return AppStore::Http(HttpStore::new(config.api.base_url.clone(), token));
    }

    static OFFLINE: OnceLock<MemoryStore> = OnceLock::new();
    let seed = config.demo.seed_fixtures;
    let memory = OFFLINE.get_or_init(|| {
        if seed {
            MemoryStore::with_bills(store::fixtures::bills())
        } else {
            MemoryStore::new()
        }
    });
    AppStore::Memory(memory.clone())
}
