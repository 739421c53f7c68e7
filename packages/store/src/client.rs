//! # Store client: the async contract between the app and its backend
//!
//! Containers never talk to a concrete backend. They hold some
//! [`BillsStore`] and call its three operations:
//!
//! | Method | Backend call | Result |
//! |--------|-------------|--------|
//! | [`list`](BillsStore::list) | `GET /bills` | Every bill visible to the session, in backend order. |
//! | [`create`](BillsStore::create) | `POST /bills` (multipart) | Uploads a receipt and opens a bill for it. Returns the bill key and file url. |
//! | [`update`](BillsStore::update) | `PATCH /bills/{id}` | Replaces the editable fields of an existing bill. |
//!
//! Implementations live in sibling modules ([`crate::memory`], [`crate::http`]).
//! [`AppStore`] wraps them in a single type so the UI can pick one at runtime.
//!
//! ## Errors
//!
//! Every failure is a [`StoreError`]. Its `Display` text is shown to the user
//! verbatim, hence the French wording (`"Erreur 404"`).

use thiserror::Error;

use crate::http::HttpStore;
use crate::memory::MemoryStore;
use crate::models::{Bill, BillDraft, BillUpload, CreatedBill};

/// Failure of a store call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend answered with a non-success HTTP status.
    #[error("Erreur {0}")]
    Status(u16),
    /// The request never got an answer.
    #[error("Erreur réseau : {0}")]
    Network(String),
    /// The answer could not be decoded.
    #[error("Réponse invalide : {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            StoreError::Status(status.as_u16())
        } else if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Network(err.to_string())
        }
    }
}

/// Async operations over bill records.
pub trait BillsStore {
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Bill>, StoreError>>;
    fn create(
        &self,
        upload: BillUpload,
    ) -> impl std::future::Future<Output = Result<CreatedBill, StoreError>>;
    fn update(
        &self,
        id: &str,
        draft: BillDraft,
    ) -> impl std::future::Future<Output = Result<Bill, StoreError>>;
}

/// The store selected by configuration.
#[derive(Clone, Debug)]
pub enum AppStore {
    Memory(MemoryStore),
    Http(HttpStore),
}

impl BillsStore for AppStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        match self {
            AppStore::Memory(store) => store.list().await,
            AppStore::Http(store) => store.list().await,
        }
    }

    async fn create(&self, upload: BillUpload) -> Result<CreatedBill, StoreError> {
        match self {
            AppStore::Memory(store) => store.create(upload).await,
            AppStore::Http(store) => store.create(upload).await,
        }
    }

    async fn update(&self, id: &str, draft: BillDraft) -> Result<Bill, StoreError> {
        match self {
            AppStore::Memory(store) => store.update(id, draft).await,
            AppStore::Http(store) => store.update(id, draft).await,
        }
    }
}
