pub mod client;
pub mod config;
pub mod fixtures;
pub mod format;
pub mod models;
pub mod session;
pub mod validation;

mod http;
mod memory;
pub use http::HttpStore;
pub use memory::MemoryStore;

pub use client::{AppStore, BillsStore, StoreError};
pub use config::BilledConfig;
pub use models::{Bill, BillDraft, BillStatus, BillUpload, CreatedBill, ExpenseType, SelectedFile};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use session::BrowserStorage;
pub use session::{KeyValueStorage, MemoryStorage, Session, User, UserType};
