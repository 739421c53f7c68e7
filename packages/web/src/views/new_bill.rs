use dioxus::prelude::*;
use store::{BilledConfig, SelectedFile};
use ui::containers::{FileChange, FileInput, NewBillContainer, NewBillForm};
use ui::views::NewBillUI;
use ui::{make_session, make_store, BrowserDialog, RoutePath};

use crate::Route;

/// Empties the receipt input after a refused file.
const CLEAR_FILE_INPUT_JS: &str = r#"document.querySelector('[data-testid="file"]').value = "";"#;

#[component]
pub fn NewBill() -> Element {
    let config = use_context::<BilledConfig>();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);

    let container = use_hook(move || {
        let email = make_session()
            .current_user()
            .map(|user| user.email)
            .unwrap_or_default();
        NewBillContainer::new(
            make_store(&config),
            move |path: RoutePath| {
                nav.push(Route::from(path));
            },
            BrowserDialog,
            email,
        )
    });

    let on_file_change = {
        let container = container.clone();
        move |file: SelectedFile| {
            let container = container.clone();
            spawn(async move {
                let mut input = FileInput::with_file(file);
                match container.handle_change_file(&mut input).await {
                    FileChange::Rejected => {
                        let _ = document::eval(CLEAR_FILE_INPUT_JS);
                    }
                    FileChange::UploadFailed(e) => {
                        error.set(Some(format!("Le justificatif n'a pas pu être envoyé : {e}")));
                    }
                    FileChange::Uploaded(_) | FileChange::Empty => error.set(None),
                }
            });
        }
    };

    let on_file_error = {
        let container = container.clone();
        move |name: String| {
            container.clear_attachment();
            error.set(Some(format!("Le justificatif {name} n'a pas pu être lu")));
        }
    };

    let on_submit = move |form: NewBillForm| {
        let container = container.clone();
        spawn(async move {
            if let Err(e) = container.handle_submit(&form).await {
                error.set(Some(format!("La note de frais n'a pas pu être envoyée : {e}")));
            }
        });
    };

    rsx! {
        if let Some(message) = error() {
            div { class: "alert alert-danger", "{message}" }
        }
        NewBillUI {
            on_file_change,
            on_file_error,
            on_submit,
        }
    }
}
