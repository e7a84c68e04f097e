//! Validation of the raw text entered into the transaction form.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, transaction::NewTransaction};

/// The only accepted date format, e.g. "2024-03-01".
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The form data for creating or updating a transaction, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The signed amount, e.g. "-4.50".
    #[serde(default)]
    pub amount: String,
    /// The date in `YYYY-MM-DD` format.
    #[serde(default)]
    pub date: String,
}

/// Check the raw form fields and convert them into a [NewTransaction].
///
/// The checks are applied in this order, the first failure is returned:
/// 1. every field must contain something other than whitespace,
/// 2. the date must be a real calendar date in `YYYY-MM-DD` format, year 1 or later,
/// 3. the amount must be a finite number.
///
/// # Errors
/// Returns [Error::MissingField], [Error::InvalidDate] or [Error::InvalidAmount].
pub fn validate_transaction_form(form: &TransactionForm) -> Result<NewTransaction, Error> {
    if [&form.description, &form.amount, &form.date]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(Error::MissingField);
    }

    let date = parse_date(&form.date)?;
    let amount = parse_amount(&form.amount)?;

    Ok(NewTransaction {
        description: form.description.clone(),
        amount,
        date,
    })
}

fn parse_date(text: &str) -> Result<Date, Error> {
    let invalid_date = || Error::InvalidDate(text.to_owned());

    // `[year]` also accepts a leading sign, so check the exact shape first.
    if !has_date_shape(text) {
        return Err(invalid_date());
    }

    match Date::parse(text, DATE_FORMAT) {
        Ok(date) if date.year() >= 1 => Ok(date),
        _ => Err(invalid_date()),
    }
}

/// Whether `text` is ten ASCII characters laid out as `DDDD-DD-DD`.
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}
