use dioxus::prelude::*;
use store::BilledConfig;
use ui::containers::{BillsContainer, FilePreview};
use ui::views::{BillsUI, BillsViewState};
use ui::{make_store, RoutePath};

use crate::Route;

#[component]
pub fn Bills() -> Element {
    let config = use_context::<BilledConfig>();
    let nav = use_navigator();
    let mut preview = use_signal(|| Option::<FilePreview>::None);

    let container = use_hook(move || {
        BillsContainer::new(make_store(&config), move |path: RoutePath| {
            nav.push(Route::from(path));
        })
    });

    // Load bills from the store on mount
    let loader = use_resource({
        let container = container.clone();
        move || {
            let container = container.clone();
            async move { container.get_bills().await }
        }
    });

    let state = BillsViewState::from_load((*loader.read()).as_ref());

    let on_new_bill = {
        let container = container.clone();
        move |_: ()| container.handle_click_new_bill()
    };

    let on_icon_eye = move |url: Option<String>| {
        preview.set(container.handle_click_icon_eye(url.as_deref()));
    };

    rsx! {
        BillsUI {
            state,
            preview: preview(),
            on_new_bill,
            on_icon_eye,
            on_close_preview: move |_| preview.set(None),
        }
    }
}
