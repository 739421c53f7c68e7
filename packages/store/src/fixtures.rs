//! Demo bills used to seed the offline store and by tests.

use crate::models::{Bill, BillStatus, ExpenseType};

pub fn bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".into(),
            email: "a@a".into(),
            expense_type: ExpenseType::Hotel,
            name: "encore".into(),
            amount: 400.0,
            date: "2004-04-04".into(),
            vat: Some(80.0),
            pct: 20.0,
            commentary: Some("séminaire billed".into()),
            file_url: Some("https://test.storage.tld/v0/b/billable/preview-facture-free-201801-pdf-1.jpg".into()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".into()),
            status: BillStatus::Pending,
            comment_admin: Some("ok".into()),
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".into(),
            email: "a@a".into(),
            expense_type: ExpenseType::Transports,
            name: "test1".into(),
            amount: 100.0,
            date: "2001-01-01".into(),
            vat: None,
            pct: 20.0,
            commentary: Some("plop".into()),
            file_url: Some("https://test.storage.tld/v0/b/billable/facture-client.png".into()),
            file_name: Some("facture-client.png".into()),
            status: BillStatus::Refused,
            comment_admin: Some("en fait non".into()),
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".into(),
            email: "a@a".into(),
            expense_type: ExpenseType::OnlineServices,
            name: "test3".into(),
            amount: 300.0,
            date: "2003-03-03".into(),
            vat: Some(60.0),
            pct: 20.0,
            commentary: None,
            file_url: Some("https://test.storage.tld/v0/b/billable/facture-client-2.jpeg".into()),
            file_name: Some("facture-client-2.jpeg".into()),
            status: BillStatus::Accepted,
            comment_admin: Some("bon bah d'accord".into()),
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".into(),
            email: "a@a".into(),
            expense_type: ExpenseType::Restaurants,
            name: "test2".into(),
            amount: 200.0,
            date: "2002-02-02".into(),
            vat: Some(40.0),
            pct: 20.0,
            commentary: Some("test2".into()),
            file_url: Some("https://test.storage.tld/v0/b/billable/preview-facture-free-201903-pdf-1.jpg".into()),
            file_name: Some("preview-facture-free-201903-pdf-1.jpg".into()),
            status: BillStatus::Refused,
            comment_admin: Some("pas la bonne facture".into()),
        },
    ]
}
