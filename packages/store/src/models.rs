//! # Domain models for expense bills
//!
//! Defines the records exchanged with a [`crate::BillsStore`]. Every type is
//! `Serialize + Deserialize` with camelCase field names so the same structs
//! travel over the REST API, sit in the in-memory store and feed the views.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Bill`] | A stored expense bill as returned by `list` and `update`. |
//! | [`BillDraft`] | The record assembled by the new-bill form and sent with `update`. |
//! | [`BillUpload`] | A receipt upload, the payload of `create`. |
//! | [`CreatedBill`] | The answer to `create`: the new bill key and the stored file url. |
//! | [`SelectedFile`] | A file picked in a file input: name, optional MIME type, bytes. |
//! | [`ExpenseType`] | The closed set of expense categories. Wire value is the French label. |
//! | [`BillStatus`] | `pending`, `accepted` or `refused`, with a display label. |
//!
//! `vat` is stored as a string by some backends (`"80"`), so [`Bill`] accepts
//! either a number or a numeric string for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Default VAT percentage applied when the form leaves it blank.
pub const DEFAULT_PCT: f64 = 20.0;

/// Expense category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseType {
    #[default]
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    Restaurants,
    #[serde(rename = "Hôtel et logement")]
    Hotel,
    #[serde(rename = "Services en ligne")]
    OnlineServices,
    #[serde(rename = "IT et électronique")]
    Electronics,
    #[serde(rename = "Equipement et matériel")]
    Equipment,
    #[serde(rename = "Fournitures de bureau")]
    OfficeSupplies,
}

impl ExpenseType {
    /// All categories in form display order.
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::Restaurants,
        ExpenseType::Hotel,
        ExpenseType::OnlineServices,
        ExpenseType::Electronics,
        ExpenseType::Equipment,
        ExpenseType::OfficeSupplies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::Restaurants => "Restaurants et bars",
            ExpenseType::Hotel => "Hôtel et logement",
            ExpenseType::OnlineServices => "Services en ligne",
            ExpenseType::Electronics => "IT et électronique",
            ExpenseType::Equipment => "Equipement et matériel",
            ExpenseType::OfficeSupplies => "Fournitures de bureau",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label does not name an [`ExpenseType`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown expense type: {0}")]
pub struct UnknownExpenseType(pub String);

impl FromStr for ExpenseType {
    type Err = UnknownExpenseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseType::ALL
            .into_iter()
            .find(|t| t.label() == s.trim())
            .ok_or_else(|| UnknownExpenseType(s.to_string()))
    }
}

/// Review status of a bill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Label shown in the bills table.
    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

/// A stored expense bill.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub expense_type: ExpenseType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    /// Calendar date as stored, normally `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "de_optional_number")]
    pub vat: Option<f64>,
    #[serde(default = "default_pct")]
    pub pct: f64,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// Overwrite the user-editable fields with a submitted draft.
    pub fn apply(&mut self, draft: BillDraft) {
        self.email = draft.email;
        self.expense_type = draft.expense_type;
        self.name = draft.name;
        self.amount = draft.amount;
        self.date = draft.date;
        self.vat = draft.vat;
        self.pct = draft.pct;
        self.commentary = draft.commentary;
        self.file_url = Some(draft.file_url);
        self.file_name = Some(draft.file_name);
        self.status = draft.status;
    }
}

/// Record built by the new-bill form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: Option<f64>,
    pub pct: f64,
    pub commentary: Option<String>,
    pub file_url: String,
    pub file_name: String,
    pub status: BillStatus,
}

/// A file chosen in a file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// MIME type when the platform reports one.
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// Receipt upload sent with `create`.
#[derive(Clone, Debug, PartialEq)]
pub struct BillUpload {
    pub email: String,
    pub file: SelectedFile,
}

/// Response to `create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    pub file_url: String,
    /// Id of the bill the upload was attached to.
    pub key: String,
}

fn default_pct() -> f64 {
    DEFAULT_PCT
}

fn de_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
