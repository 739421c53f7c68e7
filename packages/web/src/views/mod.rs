mod login;
pub use login::Login;

mod employee_layout;
pub use employee_layout::EmployeeLayout;

mod bills;
pub use bills::Bills;

mod new_bill;
pub use new_bill::NewBill;

use dioxus::prelude::*;

/// Unknown urls render nothing.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no route for /{}", segments.join("/"));
    rsx! {}
}
