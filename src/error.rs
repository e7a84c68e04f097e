//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more of the description, amount or date fields was left empty.
    #[error("Please fill out all fields")]
    MissingField,

    /// The date was not in `YYYY-MM-DD` format or does not name a real
    /// calendar date, e.g. "2023-02-30".
    ///
    /// Holds the text the user entered.
    #[error("Date must be in YYYY-MM-DD format, got \"{0}\"")]
    InvalidDate(String),

    /// The amount could not be parsed as a (finite) real number.
    ///
    /// Holds the text the user entered.
    #[error("Amount must be a number, got \"{0}\"")]
    InvalidAmount(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl Error {
    /// The message shown next to the transaction form for validation errors.
    ///
    /// Returns `None` for errors that are not caused by user input.
    pub fn form_message(&self) -> Option<&'static str> {
        match self {
            Error::MissingField => Some("Error: Please fill out all fields"),
            Error::InvalidDate(_) => Some("Error: Date must be in YYYY-MM-DD format"),
            Error::InvalidAmount(_) => Some("Error: Amount must be a number"),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for HTMX requests.
    pub(crate) fn into_alert_response(self) -> Response {
        let form_message = self.form_message();
        let (status_code, message, details) = match self {
            Error::MissingField | Error::InvalidDate(_) | Error::InvalidAmount(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid transaction".to_owned(),
                form_message.unwrap_or_default().to_owned(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "Could not find transaction".to_owned(),
                "The transaction could not be found. \
                Try refreshing the page to see if the transaction has been deleted."
                    .to_owned(),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid Timezone Settings".to_owned(),
                format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".to_owned(),
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            ),
        };

        (status_code, Alert::Error { message, details }).into_response()
    }
}
