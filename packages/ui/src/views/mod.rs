mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod pages;
pub use pages::{ErrorPage, LoadingPage};

mod vertical_layout;
pub use vertical_layout::VerticalLayout;

mod bills_ui;
pub use bills_ui::{rows_by_date_desc, BillsUI, BillsViewState};

mod new_bill_ui;
pub use new_bill_ui::NewBillUI;

mod login_ui;
pub use login_ui::LoginUI;
