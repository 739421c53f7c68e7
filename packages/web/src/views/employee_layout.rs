use dioxus::prelude::*;
use ui::views::VerticalLayout;
use ui::{authorize, make_session};

use crate::Route;

/// Layout for the employee routes: applies the role guard, then shows the
/// navigation bar with the current route highlighted.
#[component]
pub fn EmployeeLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let Some(target) = route.route_path() else {
        return rsx! { Outlet::<Route> {} };
    };
    let user = make_session().current_user();
    let allowed = authorize(target, user.as_ref());
    if allowed != target {
        nav.replace(Route::from(allowed));
        return rsx! {};
    }

    rsx! {
        div {
            class: "employee-layout",
            VerticalLayout {
                active: Some(target),
                on_navigate: move |path| {
                    nav.push(Route::from(path));
                },
                on_logout: move |_| {
                    make_session().sign_out();
                    nav.replace(Route::Login {});
                },
            }
            div {
                class: "employee-content",
                Outlet::<Route> {}
            }
        }
    }
}
