//! This crate contains all shared UI for the workspace: containers, views,
//! the route table and the platform constructors.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod containers;
pub mod routes;
pub mod views;

mod dialog;
pub use dialog::{BrowserDialog, Dialog};

mod repo;
pub use repo::{make_session, make_storage, make_store};

pub use routes::{authorize, navigate, RoutePath};
