use std::sync::{Arc, Mutex, PoisonError};

use store::format::parse_date;
use store::models::DEFAULT_PCT;
use store::validation::{is_accepted_file, REJECTED_FILE_MESSAGE};
use store::{
    Bill, BillDraft, BillStatus, BillUpload, BillsStore, ExpenseType, SelectedFile, StoreError,
};
use thiserror::Error;

use crate::dialog::Dialog;
use crate::routes::RoutePath;

/// State of the receipt file input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileInput {
    /// The input's `value` (the picked file name, empty when cleared).
    pub value: String,
    pub files: Vec<SelectedFile>,
}

impl FileInput {
    pub fn with_file(file: SelectedFile) -> Self {
        Self {
            value: file.name.clone(),
            files: vec![file],
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.files.clear();
    }
}

/// Receipt uploaded for the bill being written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub bill_id: String,
    pub file_url: String,
    pub file_name: String,
}

/// Outcome of a file input change.
#[derive(Clone, Debug, PartialEq)]
pub enum FileChange {
    /// The input holds no file.
    Empty,
    /// Not an accepted image; the user was alerted and the input cleared.
    Rejected,
    Uploaded(Attachment),
    UploadFailed(StoreError),
}

/// Raw values of the new-bill form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FormError {
    #[error("unknown expense type {0:?}")]
    ExpenseType(String),
    #[error("{field} is not a number: {value:?}")]
    Number { field: &'static str, value: String },
    #[error("invalid date {0:?}")]
    Date(String),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmitError {
    #[error("no receipt uploaded")]
    MissingAttachment,
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl NewBillForm {
    /// Build the record to submit. `amount` is required, `vat` optional and
    /// `pct` falls back to 20 when blank or not a number.
    pub fn to_draft(&self, email: &str, attachment: &Attachment) -> Result<BillDraft, FormError> {
        let expense_type: ExpenseType = self
            .expense_type
            .parse()
            .map_err(|_| FormError::ExpenseType(self.expense_type.clone()))?;
        let date = parse_date(&self.date).map_err(|_| FormError::Date(self.date.clone()))?;
        let amount = parse_number("amount", &self.amount)?;
        let vat = match self.vat.trim() {
            "" => None,
            _ => Some(parse_number("vat", &self.vat)?),
        };
        let pct = parse_number("pct", &self.pct).unwrap_or(DEFAULT_PCT);
        let commentary = Some(self.commentary.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(BillDraft {
            email: email.to_string(),
            expense_type,
            name: self.name.trim().to_string(),
            amount,
            date: date.format("%Y-%m-%d").to_string(),
            vat,
            pct,
            commentary,
            file_url: attachment.file_url.clone(),
            file_name: attachment.file_name.clone(),
            status: BillStatus::Pending,
        })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, FormError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FormError::Number {
            field,
            value: value.to_string(),
        })
}

/// New-bill page logic. Clones share the uploaded attachment.
#[derive(Clone)]
pub struct NewBillContainer<S, N, D> {
    store: S,
    on_navigate: N,
    dialog: D,
    email: String,
    attachment: Arc<Mutex<Option<Attachment>>>,
}

impl<S, N, D> NewBillContainer<S, N, D>
where
    S: BillsStore,
    N: Fn(RoutePath),
    D: Dialog,
{
    pub fn new(store: S, on_navigate: N, dialog: D, email: impl Into<String>) -> Self {
        Self {
            store,
            on_navigate,
            dialog,
            email: email.into(),
            attachment: Arc::new(Mutex::new(None)),
        }
    }

    pub fn attachment(&self) -> Option<Attachment> {
        self.attachment
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget the uploaded receipt, e.g. when a newly picked file could not be read.
    pub fn clear_attachment(&self) {
        self.set_attachment(None);
    }

    fn set_attachment(&self, attachment: Option<Attachment>) {
        *self.attachment.lock().unwrap_or_else(PoisonError::into_inner) = attachment;
    }

    /// Check the picked receipt and upload it.
    ///
    /// A refused file triggers one alert and empties the input. An accepted
    /// one is left in the input and its upload remembered for submit.
    pub async fn handle_change_file(&self, input: &mut FileInput) -> FileChange {
        let Some(file) = input.files.first().cloned() else {
            return FileChange::Empty;
        };

        if !is_accepted_file(&file.name, file.mime.as_deref()) {
            tracing::info!(file = %file.name, "refused receipt file");
            self.dialog.alert(REJECTED_FILE_MESSAGE);
            input.clear();
            self.set_attachment(None);
            return FileChange::Rejected;
        }

        let file_name = file.name.clone();
        let upload = BillUpload {
            email: self.email.clone(),
            file,
        };
        match self.store.create(upload).await {
            Ok(created) => {
                let attachment = Attachment {
                    bill_id: created.key,
                    file_url: created.file_url,
                    file_name,
                };
                self.set_attachment(Some(attachment.clone()));
                FileChange::Uploaded(attachment)
            }
            Err(e) => {
                tracing::error!(file = %file_name, "receipt upload failed: {e}");
                self.set_attachment(None);
                FileChange::UploadFailed(e)
            }
        }
    }

    /// Submit the form: one `update` call, then back to the bills list.
    /// On failure the error is logged and the user stays on the form.
    pub async fn handle_submit(&self, form: &NewBillForm) -> Result<Bill, SubmitError> {
        let Some(attachment) = self.attachment() else {
            tracing::warn!("bill submitted without receipt");
            return Err(SubmitError::MissingAttachment);
        };
        let draft = form.to_draft(&self.email, &attachment).map_err(|e| {
            tracing::warn!("invalid new bill form: {e}");
            SubmitError::from(e)
        })?;

        match self.store.update(&attachment.bill_id, draft).await {
            Ok(bill) => {
                tracing::info!(bill = %bill.id, "bill submitted");
                (self.on_navigate)(RoutePath::Bills);
                Ok(bill)
            }
            Err(e) => {
                tracing::error!(bill = %attachment.bill_id, "bill submit failed: {e}");
                Err(e.into())
            }
        }
    }
}
