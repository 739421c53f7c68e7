use dioxus::prelude::*;

use store::BilledConfig;
use ui::RoutePath;
use views::{Bills, EmployeeLayout, Login, NewBill, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[layout(EmployeeLayout)]
        #[route("/employee/bills")]
        Bills {},
        #[route("/employee/bill/new")]
        NewBill {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<RoutePath> for Route {
    fn from(path: RoutePath) -> Self {
        match path {
            RoutePath::Login => Route::Login {},
            RoutePath::Bills => Route::Bills {},
            RoutePath::NewBill => Route::NewBill {},
        }
    }
}

impl Route {
    /// The application view behind this route, `None` for unknown urls.
    fn route_path(&self) -> Option<RoutePath> {
        match self {
            Route::Login {} => Some(RoutePath::Login),
            Route::Bills {} => Some(RoutePath::Bills),
            Route::NewBill {} => Some(RoutePath::NewBill),
            Route::NotFound { .. } => None,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../billed.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> BilledConfig {
    match BilledConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid {}: {e}", BilledConfig::filename());
            BilledConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_hook(move || {
        if config.uses_backend() {
            tracing::info!("using bills backend at {}", config.api.base_url);
        } else {
            tracing::info!("no backend configured, using the offline store");
        }
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_mapping_is_inverse() {
        for path in [RoutePath::Login, RoutePath::Bills, RoutePath::NewBill] {
            assert_eq!(Route::from(path).route_path(), Some(path));
        }
    }

    #[test]
    fn test_unknown_url_has_no_route_path() {
        let route = Route::NotFound {
            segments: vec!["admin".into(), "dashboard".into()],
        };
        assert_eq!(route.route_path(), None);
    }

    #[test]
    fn test_route_urls_match_route_paths() {
        for path in [RoutePath::Login, RoutePath::Bills, RoutePath::NewBill] {
            assert_eq!(Route::from(path).to_string(), path.path());
        }
    }
}
