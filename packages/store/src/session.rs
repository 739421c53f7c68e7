//! # Session: the signed-in user kept in local storage
//!
//! The app keeps two keys in the browser's `localStorage`:
//!
//! | Key | Value |
//! |-----|-------|
//! | `"user"` | JSON `{"type": "Employee" \| "Admin", "email": "..."}` |
//! | `"jwt"` | Bearer token for [`crate::HttpStore`], when the backend issued one |
//!
//! Storage access goes through [`KeyValueStorage`] so the same [`Session`]
//! logic runs against [`MemoryStorage`] on native builds and in tests, and
//! against [`BrowserStorage`] in the browser.
//!
//! The employee login form only records the user. `"jwt"` is written through
//! [`Session::set_token`] by whatever authenticates against the backend;
//! without it [`crate::HttpStore`] sends unauthenticated requests.
//!
//! There is no expiry: a stored user stays signed in until [`Session::sign_out`].
//! Malformed JSON under `"user"` reads as "nobody signed in".

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

pub const USER_KEY: &str = "user";
pub const JWT_KEY: &str = "jwt";

/// Role of the signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[serde(alias = "employee")]
    Employee,
    #[serde(alias = "admin")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }
}

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage for native builds and tests. Clones share entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// The browser's `window.localStorage`.
///
/// Errors from the Web Storage API (private mode, quota) are logged and
/// otherwise behave like a missing key.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Typed access to the session keys.
#[derive(Clone, Debug)]
pub struct Session<K: KeyValueStorage> {
    storage: K,
}

impl<K: KeyValueStorage> Session<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    /// The stored user, if any.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("ignoring malformed stored user: {e}");
                None
            }
        }
    }

    pub fn sign_in(&self, user: &User) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(user)?;
        self.storage.set(USER_KEY, &json);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(JWT_KEY);
    }

    /// Store the backend bearer token. An empty token removes it.
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            self.storage.remove(JWT_KEY);
        } else {
            self.storage.set(JWT_KEY, token);
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(JWT_KEY).filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_roundtrip() {
        let session = Session::new(MemoryStorage::new());
        assert!(session.current_user().is_none());

        session.sign_in(&User::employee("a@a")).unwrap();
        let user = session.current_user().unwrap();
        assert_eq!(user.user_type, UserType::Employee);
        assert_eq!(user.email, "a@a");
    }

    #[test]
    fn test_reads_json_written_by_other_clients() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, r#"{"type":"employee"}"#);
        let user = Session::new(storage.clone()).current_user().unwrap();
        assert!(user.is_employee());
        assert_eq!(user.email, "");

        storage.set(USER_KEY, r#"{"type":"Admin","email":"admin@test.tld"}"#);
        let user = Session::new(storage).current_user().unwrap();
        assert_eq!(user.user_type, UserType::Admin);
    }

    #[test]
    fn test_malformed_user_reads_as_signed_out() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "not json");
        assert!(Session::new(storage).current_user().is_none());
    }

    #[test]
    fn test_sign_out_clears_token() {
        let session = Session::new(MemoryStorage::new());
        assert!(session.token().is_none());
        session.set_token("token");
        session.sign_in(&User::employee("a@a")).unwrap();
        assert_eq!(session.token().as_deref(), Some("token"));

        session.sign_out();
        assert!(session.current_user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_empty_token_is_removed() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());
        session.set_token("token");
        session.set_token("");
        assert!(storage.get(JWT_KEY).is_none());
        assert!(session.token().is_none());
    }
}
