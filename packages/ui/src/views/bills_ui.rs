use dioxus::prelude::*;
use store::format::parse_date;
use store::StoreError;

use crate::containers::{BillRow, FilePreview};
use crate::icons::FaEye;
use crate::views::{ErrorPage, LoadingPage, ModalOverlay};
use crate::Icon;

/// What the bills page has to show.
#[derive(Clone, Debug, PartialEq)]
pub enum BillsViewState {
    Loading,
    Error(String),
    Ready(Vec<BillRow>),
}

impl BillsViewState {
    /// State for a load that may still be pending.
    pub fn from_load(load: Option<&Result<Vec<BillRow>, StoreError>>) -> Self {
        match load {
            None => BillsViewState::Loading,
            Some(Ok(rows)) => BillsViewState::Ready(rows.clone()),
            Some(Err(e)) => BillsViewState::Error(e.to_string()),
        }
    }
}

/// Rows ordered most recent first. Rows whose date does not parse go last.
pub fn rows_by_date_desc(mut rows: Vec<BillRow>) -> Vec<BillRow> {
    rows.sort_by(|a, b| {
        let a = parse_date(&a.bill.date).ok();
        let b = parse_date(&b.bill.date).ok();
        b.cmp(&a)
    });
    rows
}

/// The employee's bills table.
#[component]
pub fn BillsUI(
    state: BillsViewState,
    preview: Option<FilePreview>,
    on_new_bill: EventHandler<()>,
    on_icon_eye: EventHandler<Option<String>>,
    on_close_preview: EventHandler<()>,
) -> Element {
    let rows = match state {
        BillsViewState::Loading => return rsx! { LoadingPage {} },
        BillsViewState::Error(error) => return rsx! { ErrorPage { error } },
        BillsViewState::Ready(rows) => rows_by_date_desc(rows),
    };

    rsx! {
        div {
            class: "content",
            div {
                class: "content-header",
                div { class: "content-title", "Mes notes de frais" }
                button {
                    r#type: "button",
                    "data-testid": "btn-new-bill",
                    class: "btn btn-primary",
                    onclick: move |_| on_new_bill.call(()),
                    "Nouvelle note de frais"
                }
            }
            div {
                id: "data-table",
                table {
                    id: "example",
                    class: "table table-striped",
                    thead {
                        tr {
                            th { "Type" }
                            th { "Nom" }
                            th { "Date" }
                            th { "Montant" }
                            th { "Statut" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        "data-testid": "tbody",
                        for row in rows {
                            BillRowView { key: "{row.bill.id}", row, on_icon_eye }
                        }
                    }
                }
            }
            if let Some(preview) = preview {
                ModalOverlay {
                    title: "Justificatif",
                    testid: "modaleFile",
                    on_close: on_close_preview,
                    div {
                        class: "bill-proof-container",
                        img { src: "{preview.url}", alt: "Bill", width: "100%" }
                    }
                }
            }
        }
    }
}

#[component]
fn BillRowView(row: BillRow, on_icon_eye: EventHandler<Option<String>>) -> Element {
    let file_url = row.bill.file_url.clone();
    let data_url = file_url.clone().unwrap_or_default();

    rsx! {
        tr {
            td { "{row.bill.expense_type}" }
            td { "{row.bill.name}" }
            td { "data-testid": "bill-date", "{row.date}" }
            td { "{row.bill.amount} €" }
            td { "{row.status}" }
            td {
                div {
                    class: "icon-actions",
                    div {
                        id: "eye",
                        "data-testid": "icon-eye",
                        "data-bill-url": "{data_url}",
                        onclick: move |_| on_icon_eye.call(file_url.clone()),
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use store::fixtures;

    use super::*;
    use crate::views::test_support::{opening_tag, render, texts_with_testid};

    fn rows() -> Vec<BillRow> {
        fixtures::bills().into_iter().map(BillRow::from_bill).collect()
    }

    #[test]
    fn test_state_from_load() {
        assert_eq!(BillsViewState::from_load(None), BillsViewState::Loading);
        assert_eq!(
            BillsViewState::from_load(Some(&Err(StoreError::Status(404)))),
            BillsViewState::Error("Erreur 404".into())
        );
        let loaded = Ok(rows());
        assert_eq!(
            BillsViewState::from_load(Some(&loaded)),
            BillsViewState::Ready(rows())
        );
    }

    fn bills_app((state, preview): (BillsViewState, Option<FilePreview>)) -> Element {
        rsx! {
            BillsUI {
                state,
                preview,
                on_new_bill: move |_| {},
                on_icon_eye: move |_| {},
                on_close_preview: move |_| {},
            }
        }
    }

    #[test]
    fn test_bills_are_ordered_most_recent_first() {
        let html = render(bills_app, (BillsViewState::Ready(rows()), None));

        let dates = texts_with_testid(&html, "bill-date");
        assert_eq!(dates, vec!["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);

        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_ready_page_has_table_and_actions() {
        let html = render(bills_app, (BillsViewState::Ready(rows()), None));

        assert!(html.contains("Mes notes de frais"));
        assert!(opening_tag(&html, "tbody").is_some());
        assert!(opening_tag(&html, "btn-new-bill").is_some());
        assert_eq!(html.matches(r#"data-testid="icon-eye""#).count(), 4);
        assert!(html.contains(r#"data-bill-url="https://test.storage.tld/v0/b/billable/facture-client.png""#));
        assert!(html.contains("En attente"));
        assert!(opening_tag(&html, "modaleFile").is_none());
    }

    #[test]
    fn test_preview_opens_modal() {
        let preview = FilePreview {
            url: "https://test.storage.tld/a.jpg".into(),
        };
        let html = render(bills_app, (BillsViewState::Ready(rows()), Some(preview)));

        assert!(opening_tag(&html, "modaleFile").is_some());
        assert!(html.contains(r#"src="https://test.storage.tld/a.jpg""#));
    }

    #[test]
    fn test_loading_state() {
        let html = render(bills_app, (BillsViewState::Loading, None));
        assert!(html.contains("Loading..."));
        assert!(opening_tag(&html, "tbody").is_none());
    }

    #[test]
    fn test_error_state_shows_store_message() {
        for message in ["Erreur 404", "Erreur 500"] {
            let html = render(bills_app, (BillsViewState::Error(message.into()), None));
            assert!(html.contains(message));
            assert!(opening_tag(&html, "tbody").is_none());
        }
    }

    #[test]
    fn test_unparsable_dates_sort_last() {
        let mut rows = rows();
        rows[3].bill.date = "???".into();
        let sorted = rows_by_date_desc(rows);
        assert_eq!(sorted.last().unwrap().bill.date, "???");
        assert_eq!(sorted[0].bill.date, "2004-04-04");
    }
}
