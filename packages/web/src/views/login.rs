//! Login page: stores the employee in the session and opens the bills list.

use dioxus::prelude::*;
use store::User;
use ui::views::LoginUI;
use ui::make_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    // Already signed in as an employee: straight to the bills
    if make_session().current_user().is_some_and(|u| u.is_employee()) {
        nav.replace(Route::Bills {});
    }

    let on_login = move |email: String| {
        let session = make_session();
        match session.sign_in(&User::employee(email)) {
            Ok(()) => {
                nav.push(Route::Bills {});
            }
            Err(e) => tracing::error!("failed to store the signed-in user: {e}"),
        }
    };

    rsx! {
        LoginUI { on_login }
    }
}
