use store::format::{format_date, format_status};
use store::{Bill, BillsStore, StoreError};

use crate::routes::RoutePath;

/// A bill ready for the table: display date and status label resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct BillRow {
    pub bill: Bill,
    pub date: String,
    pub status: String,
}

impl BillRow {
    pub fn from_bill(bill: Bill) -> Self {
        let date = match format_date(&bill.date) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(bill = %bill.id, date = %bill.date, "corrupted bill date: {e}");
                bill.date.clone()
            }
        };
        let status = format_status(bill.status).to_string();
        Self { bill, date, status }
    }
}

/// Receipt shown in the preview modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePreview {
    pub url: String,
}

/// Bills page logic.
#[derive(Clone)]
pub struct BillsContainer<S, N> {
    store: S,
    on_navigate: N,
}

impl<S, N> BillsContainer<S, N>
where
    S: BillsStore,
    N: Fn(RoutePath),
{
    pub fn new(store: S, on_navigate: N) -> Self {
        Self { store, on_navigate }
    }

    /// Fetch the bills and format them for display, keeping store order.
    pub async fn get_bills(&self) -> Result<Vec<BillRow>, StoreError> {
        let bills = self
            .store
            .list()
            .await
            .inspect_err(|e| tracing::error!("failed to load bills: {e}"))?;
        tracing::debug!(count = bills.len(), "bills loaded");
        Ok(bills.into_iter().map(BillRow::from_bill).collect())
    }

    pub fn handle_click_new_bill(&self) {
        (self.on_navigate)(RoutePath::NewBill);
    }

    /// Resolve the receipt behind an eye icon. No url, no preview.
    pub fn handle_click_icon_eye(&self, bill_url: Option<&str>) -> Option<FilePreview> {
        match bill_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Some(FilePreview {
                url: url.to_string(),
            }),
            None => {
                tracing::warn!("eye icon clicked on a bill without receipt");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use store::{fixtures, MemoryStore};

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<RoutePath>>>, impl Fn(RoutePath) + Clone) {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        (visited, move |route| sink.borrow_mut().push(route))
    }

    #[tokio::test]
    async fn test_get_bills_formats_rows() {
        let (_, navigate) = recorder();
        let container = BillsContainer::new(MemoryStore::with_bills(fixtures::bills()), navigate);

        let rows = container.get_bills().await.unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].date, "2004-04-04");
        assert_eq!(rows[0].status, "En attente");
        assert_eq!(rows[1].status, "Refusé");
        assert_eq!(rows[2].status, "Accepté");
    }

    #[tokio::test]
    async fn test_get_bills_keeps_store_order() {
        let (_, navigate) = recorder();
        let container = BillsContainer::new(MemoryStore::with_bills(fixtures::bills()), navigate);

        let ids: Vec<_> = container
            .get_bills()
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.bill.id)
            .collect();
        let expected: Vec<_> = fixtures::bills().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_corrupted_date_is_shown_raw() {
        let mut bills = fixtures::bills();
        bills[0].date = "pas une date".into();
        let (_, navigate) = recorder();
        let container = BillsContainer::new(MemoryStore::with_bills(bills), navigate);

        let rows = container.get_bills().await.unwrap();
        assert_eq!(rows[0].date, "pas une date");
    }

    #[tokio::test]
    async fn test_list_rejection_propagates() {
        for code in [404, 500] {
            let store = MemoryStore::with_bills(fixtures::bills());
            store.fail_next_list(StoreError::Status(code));
            let (_, navigate) = recorder();
            let container = BillsContainer::new(store, navigate);

            let err = container.get_bills().await.unwrap_err();
            assert_eq!(err.to_string(), format!("Erreur {code}"));
        }
    }

    #[test]
    fn test_click_new_bill_navigates() {
        let (visited, navigate) = recorder();
        let container = BillsContainer::new(MemoryStore::new(), navigate);

        container.handle_click_new_bill();
        assert_eq!(*visited.borrow(), vec![RoutePath::NewBill]);
    }

    #[test]
    fn test_click_icon_eye() {
        let (_, navigate) = recorder();
        let container = BillsContainer::new(MemoryStore::new(), navigate);

        let preview = container.handle_click_icon_eye(Some("https://test.storage.tld/a.jpg"));
        assert_eq!(preview.unwrap().url, "https://test.storage.tld/a.jpg");
        assert!(container.handle_click_icon_eye(None).is_none());
        assert!(container.handle_click_icon_eye(Some(" ")).is_none());
    }
}
