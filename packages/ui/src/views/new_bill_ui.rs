use std::path::Path;

use dioxus::prelude::*;
use store::{ExpenseType, SelectedFile};

use crate::containers::NewBillForm;

/// Inline form for sending a new expense bill.
///
/// The receipt is reported through `on_file_change` as soon as it is picked,
/// or through `on_file_error` when it cannot be read. The other fields are
/// collected into a [`NewBillForm`] on submit.
#[component]
pub fn NewBillUI(
    on_file_change: EventHandler<SelectedFile>,
    on_file_error: EventHandler<String>,
    on_submit: EventHandler<NewBillForm>,
) -> Element {
    let mut expense_type = use_signal(|| ExpenseType::Transports.label().to_string());
    let mut name = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut vat = use_signal(String::new);
    let mut pct = use_signal(String::new);
    let mut commentary = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(NewBillForm {
            expense_type: expense_type(),
            name: name(),
            date: date(),
            amount: amount(),
            vat: vat(),
            pct: pct(),
            commentary: commentary(),
        });
    };

    let handle_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(picked) = engine.files().into_iter().next() else {
            return;
        };
        match picked_file(&picked, engine.read_file(&picked).await) {
            Ok(file) => on_file_change.call(file),
            Err(name) => {
                tracing::error!(file = %name, "could not read the picked receipt");
                on_file_error.call(name);
            }
        }
    };

    rsx! {
        div {
            class: "content",
            div {
                class: "content-header",
                div { class: "content-title", "Envoyer une note de frais" }
            }
            div {
                class: "form-newbill-container content-inner",
                form {
                    "data-testid": "form-new-bill",
                    onsubmit: handle_submit,
                    div {
                        class: "row",
                        div {
                            class: "col-md-6",
                            div {
                                class: "col-half",
                                label { "for": "expense-type", class: "bold-label", "Type de dépense" }
                                select {
                                    id: "expense-type",
                                    required: true,
                                    class: "form-control blue-border",
                                    "data-testid": "expense-type",
                                    value: expense_type(),
                                    onchange: move |evt| expense_type.set(evt.value()),
                                    for t in ExpenseType::ALL {
                                        option { key: "{t}", value: t.label(), "{t}" }
                                    }
                                }
                            }
                            div {
                                class: "col-half",
                                label { "for": "expense-name", class: "bold-label", "Nom de la dépense" }
                                input {
                                    id: "expense-name",
                                    r#type: "text",
                                    class: "form-control blue-border",
                                    "data-testid": "expense-name",
                                    placeholder: "Vol Paris Londres",
                                    value: name(),
                                    oninput: move |evt| name.set(evt.value()),
                                }
                            }
                            div {
                                class: "col-half",
                                label { "for": "datepicker", class: "bold-label", "Date" }
                                input {
                                    id: "datepicker",
                                    required: true,
                                    r#type: "date",
                                    class: "form-control blue-border",
                                    "data-testid": "datepicker",
                                    value: date(),
                                    oninput: move |evt| date.set(evt.value()),
                                }
                            }
                            div {
                                class: "col-half",
                                label { "for": "amount", class: "bold-label", "Montant TTC" }
                                input {
                                    id: "amount",
                                    required: true,
                                    r#type: "number",
                                    class: "form-control blue-border input-icon input-icon-right",
                                    "data-testid": "amount",
                                    placeholder: "348",
                                    value: amount(),
                                    oninput: move |evt| amount.set(evt.value()),
                                }
                            }
                            div {
                                class: "col-half-row",
                                div {
                                    class: "flex-col",
                                    label { "for": "vat", class: "bold-label", "TVA" }
                                    input {
                                        id: "vat",
                                        r#type: "number",
                                        class: "form-control blue-border",
                                        "data-testid": "vat",
                                        placeholder: "70",
                                        value: vat(),
                                        oninput: move |evt| vat.set(evt.value()),
                                    }
                                }
                                div {
                                    class: "flex-col",
                                    input {
                                        r#type: "number",
                                        class: "form-control blue-border",
                                        "data-testid": "pct",
                                        placeholder: "20",
                                        value: pct(),
                                        oninput: move |evt| pct.set(evt.value()),
                                    }
                                }
                            }
                        }
                        div {
                            class: "col-md-6",
                            div {
                                class: "col-half",
                                label { "for": "commentary", class: "bold-label", "Commentaire" }
                                textarea {
                                    id: "commentary",
                                    class: "form-control blue-border",
                                    "data-testid": "commentary",
                                    rows: "3",
                                    value: commentary(),
                                    oninput: move |evt| commentary.set(evt.value()),
                                }
                            }
                            div {
                                class: "col-half",
                                label { "for": "file", class: "bold-label", "Justificatif" }
                                input {
                                    id: "file",
                                    required: true,
                                    r#type: "file",
                                    accept: ".jpg,.jpeg,.png",
                                    class: "form-control blue-border",
                                    "data-testid": "file",
                                    onchange: handle_file,
                                }
                            }
                        }
                    }
                    div {
                        class: "row",
                        div {
                            class: "col-md-6",
                            div {
                                class: "col-half",
                                button {
                                    r#type: "submit",
                                    id: "btn-send-bill",
                                    class: "btn btn-primary",
                                    "Envoyer"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Turn the file engine's answer into a receipt. A file that could not be
/// read yields `Err` with its name.
pub(crate) fn picked_file(path: &str, bytes: Option<Vec<u8>>) -> Result<SelectedFile, String> {
    // Desktop renderers report full paths.
    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string();
    match bytes {
        Some(bytes) => Ok(SelectedFile::new(file_name, bytes)),
        None => Err(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{opening_tag, render};

    fn new_bill_app(_: ()) -> Element {
        rsx! {
            NewBillUI {
                on_file_change: move |_| {},
                on_file_error: move |_| {},
                on_submit: move |_| {},
            }
        }
    }

    #[test]
    fn test_form_has_every_field() {
        let html = render(new_bill_app, ());
        for testid in [
            "form-new-bill",
            "expense-type",
            "expense-name",
            "datepicker",
            "amount",
            "vat",
            "pct",
            "commentary",
            "file",
        ] {
            assert!(opening_tag(&html, testid).is_some(), "missing {testid}");
        }
        assert_eq!(html.matches("<button").count(), 1);
    }

    #[test]
    fn test_file_input_is_restricted_to_images() {
        let html = render(new_bill_app, ());
        let tag = opening_tag(&html, "file").unwrap();
        assert!(tag.contains(r#"type="file""#));
        assert!(tag.contains(r#"accept=".jpg,.jpeg,.png""#));
    }

    #[test]
    fn test_every_expense_type_is_offered() {
        let html = render(new_bill_app, ());
        for t in ExpenseType::ALL {
            assert!(html.contains(&format!(r#"value="{}""#, t.label())), "missing {t}");
        }
    }

    #[test]
    fn test_picked_file_keeps_name_and_bytes() {
        let file = picked_file("/home/user/receipts/sample.png", Some(vec![1, 2])).unwrap();
        assert_eq!(file.name, "sample.png");
        assert_eq!(file.bytes, vec![1, 2]);
    }

    #[test]
    fn test_unreadable_file_is_not_forwarded() {
        assert_eq!(picked_file("sample.jpg", None), Err("sample.jpg".to_string()));
    }
}
