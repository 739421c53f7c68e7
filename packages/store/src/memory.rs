use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::client::{BillsStore, StoreError};
use crate::models::{Bill, BillDraft, BillStatus, BillUpload, CreatedBill};

/// In-memory BillsStore for testing and the offline demo.
///
/// Clones share the same bills, so a store handed to several containers
/// behaves like a single backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bills: Arc<Mutex<Vec<Bill>>>,
    next_key: Arc<AtomicUsize>,
    list_failure: Arc<Mutex<Option<StoreError>>>,
    create_failure: Arc<Mutex<Option<StoreError>>>,
    update_failure: Arc<Mutex<Option<StoreError>>>,
    create_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let store = Self::default();
        *lock(&store.bills) = bills;
        store
    }

    /// Make the next `list` call fail with `err`.
    pub fn fail_next_list(&self, err: StoreError) {
        *lock(&self.list_failure) = Some(err);
    }

    /// Make the next `create` call fail with `err`.
    pub fn fail_next_create(&self, err: StoreError) {
        *lock(&self.create_failure) = Some(err);
    }

    /// Make the next `update` call fail with `err`.
    pub fn fail_next_update(&self, err: StoreError) {
        *lock(&self.update_failure) = Some(err);
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: &str) -> Option<Bill> {
        lock(&self.bills).iter().find(|b| b.id == id).cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn take_failure(slot: &Mutex<Option<StoreError>>) -> Result<(), StoreError> {
    match lock(slot).take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

impl BillsStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        take_failure(&self.list_failure)?;
        Ok(lock(&self.bills).clone())
    }

    async fn create(&self, upload: BillUpload) -> Result<CreatedBill, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        take_failure(&self.create_failure)?;

        let key = format!("memory-{}", self.next_key.fetch_add(1, Ordering::SeqCst) + 1);
        let file_url = format!("memory://{key}/{}", upload.file.name);
        lock(&self.bills).push(Bill {
            id: key.clone(),
            email: upload.email,
            file_url: Some(file_url.clone()),
            file_name: Some(upload.file.name),
            status: BillStatus::Pending,
            pct: crate::models::DEFAULT_PCT,
            ..Bill::default()
        });
        Ok(CreatedBill { file_url, key })
    }

    async fn update(&self, id: &str, draft: BillDraft) -> Result<Bill, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        take_failure(&self.update_failure)?;

        let mut bills = lock(&self.bills);
        let bill = bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::Status(404))?;
        bill.apply(draft);
        Ok(bill.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseType, SelectedFile};

    fn draft(file_url: &str) -> BillDraft {
        BillDraft {
            email: "a@a".into(),
            expense_type: ExpenseType::Transports,
            name: "test".into(),
            amount: 700.0,
            date: "2007-10-10".into(),
            vat: Some(80.0),
            pct: 20.0,
            commentary: Some("séminaire billed".into()),
            file_url: file_url.into(),
            file_name: "sample.jpg".into(),
            status: BillStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let store = MemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());

        let created = store
            .create(BillUpload {
                email: "a@a".into(),
                file: SelectedFile::new("sample.jpg", vec![1, 2, 3]),
            })
            .await
            .unwrap();
        assert_eq!(created.key, "memory-1");
        assert_eq!(created.file_url, "memory://memory-1/sample.jpg");

        let bill = store
            .update(&created.key, draft(&created.file_url))
            .await
            .unwrap();
        assert_eq!(bill.name, "test");
        assert_eq!(bill.amount, 700.0);

        let bills = store.list().await.unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].date, "2007-10-10");
        assert_eq!(store.create_calls(), 1);
        assert_eq!(store.update_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_bill() {
        let store = MemoryStore::new();
        let err = store.update("missing", draft("x")).await.unwrap_err();
        assert_eq!(err, StoreError::Status(404));
    }

    #[tokio::test]
    async fn test_injected_failure_is_one_shot() {
        let store = MemoryStore::with_bills(crate::fixtures::bills());
        store.fail_next_list(StoreError::Status(500));

        assert_eq!(store.list().await.unwrap_err().to_string(), "Erreur 500");
        assert_eq!(store.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        other
            .create(BillUpload {
                email: "a@a".into(),
                file: SelectedFile::new("scan.png", vec![]),
            })
            .await
            .unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
