//! Display formatting for the bills table.

use chrono::NaiveDate;

use crate::models::BillStatus;

/// Format a stored date as `YYYY-MM-DD`.
///
/// Accepts unpadded months and days (`2004-4-4`). Anything chrono cannot
/// parse is returned as an error so the caller can decide to show the raw
/// value instead.
pub fn format_date(raw: &str) -> Result<String, chrono::ParseError> {
    let date = parse_date(raw)?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

pub fn format_status(status: BillStatus) -> &'static str {
    status.label()
}
