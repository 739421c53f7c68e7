use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaRightFromBracket, FaWindowMaximize};
use crate::routes::RoutePath;
use crate::Icon;

const ACTIVE_ICON: &str = "active-icon";

fn icon_class(active: bool) -> &'static str {
    if active {
        ACTIVE_ICON
    } else {
        ""
    }
}

/// Employee navigation bar. The icon of the current route is highlighted.
#[component]
pub fn VerticalLayout(
    active: Option<RoutePath>,
    on_navigate: EventHandler<RoutePath>,
    on_logout: EventHandler<()>,
) -> Element {
    let window_class = icon_class(active == Some(RoutePath::Bills));
    let mail_class = icon_class(active == Some(RoutePath::NewBill));

    rsx! {
        div {
            class: "vertical-navbar",
            div { class: "layout-title", "Billed" }
            div {
                id: "layout-icon1",
                "data-testid": "icon-window",
                class: window_class,
                title: "Mes notes de frais",
                onclick: move |_| on_navigate.call(RoutePath::Bills),
                Icon { icon: FaWindowMaximize, width: 20, height: 20 }
            }
            div {
                id: "layout-icon2",
                "data-testid": "icon-mail",
                class: mail_class,
                title: "Nouvelle note de frais",
                onclick: move |_| on_navigate.call(RoutePath::NewBill),
                Icon { icon: FaEnvelope, width: 20, height: 20 }
            }
            div {
                id: "layout-disconnect",
                "data-testid": "layout-disconnect",
                title: "Se déconnecter",
                onclick: move |_| on_logout.call(()),
                Icon { icon: FaRightFromBracket, width: 20, height: 20 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{opening_tag, render};

    fn layout_app(active: Option<RoutePath>) -> Element {
        rsx! {
            VerticalLayout {
                active,
                on_navigate: move |_| {},
                on_logout: move |_| {},
            }
        }
    }

    #[test]
    fn test_bills_route_highlights_window_icon() {
        let html = render(layout_app, Some(RoutePath::Bills));
        assert!(opening_tag(&html, "icon-window").unwrap().contains("active-icon"));
        assert!(!opening_tag(&html, "icon-mail").unwrap().contains("active-icon"));
    }

    #[test]
    fn test_new_bill_route_highlights_mail_icon() {
        let html = render(layout_app, Some(RoutePath::NewBill));
        assert!(opening_tag(&html, "icon-mail").unwrap().contains("active-icon"));
        assert!(!opening_tag(&html, "icon-window").unwrap().contains("active-icon"));
    }

    #[test]
    fn test_employee_navigation_highlights_route_icon() {
        let employee = store::User::employee("a@a");

        let route = crate::routes::navigate("#employee/bills", Some(&employee));
        let html = render(layout_app, route);
        assert!(opening_tag(&html, "icon-window").unwrap().contains("active-icon"));

        let route = crate::routes::navigate("#employee/bill/new", Some(&employee));
        let html = render(layout_app, route);
        assert!(opening_tag(&html, "icon-mail").unwrap().contains("active-icon"));
    }

    #[test]
    fn test_no_active_route() {
        let html = render(layout_app, None);
        assert!(!html.contains("active-icon"));
        assert!(opening_tag(&html, "layout-disconnect").is_some());
    }
}
