//! Containers: the glue between the router, a [`store::BillsStore`] and the
//! view components. They hold no Dioxus state, so they can be driven by the
//! web pages and by tests alike.

mod bills;
pub use bills::{BillRow, BillsContainer, FilePreview};

mod new_bill;
pub use new_bill::{
    Attachment, FileChange, FileInput, FormError, NewBillContainer, NewBillForm, SubmitError,
};
