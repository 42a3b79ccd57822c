//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, error_page::InternalServerError, routing::get_internal_server_error_redirect,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string, or a string of only whitespace, was used as a person's name.
    #[error("Person name cannot be empty")]
    EmptyPersonName,

    /// A person's name contained a comma.
    ///
    /// Names are stored comma-joined in the split column of the expenses
    /// table, so a comma inside a name would split it into two people.
    #[error("\"{0}\" contains a comma, which is not allowed in a name")]
    PersonNameContainsComma(String),

    /// Tried to add an expense before any people were added to the roster.
    #[error("cannot add an expense when there are no people")]
    NoPeople,

    /// The expense amount was not a number, was not finite or was below the minimum.
    #[error("\"{0}\" is not a valid expense amount")]
    InvalidAmount(String),

    /// The expense date could not be parsed as an ISO-8601 date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The category submitted with an expense is not one of the known categories.
    #[error("\"{0}\" is not a known category")]
    InvalidCategory(String),

    /// Reading or writing a table file failed.
    ///
    /// A missing file is not an error, it is read as an empty table.
    #[error("could not access the table file: {0}")]
    Io(String),

    /// A table file exists but could not be parsed or written as CSV.
    #[error("could not read or write CSV: {0}")]
    Csv(String),

    /// Could not acquire the lock guarding one of the stores.
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        tracing::error!("an unhandled I/O error occurred: {value}");
        Error::Io(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        tracing::error!("an unhandled CSV error occurred: {value}");
        Error::Csv(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::Io(_) | Error::Csv(_) => InternalServerError {
                description: "Could not load your data",
                fix: "Check that the data directory is readable and the CSV files are valid.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for an htmx request.
    ///
    /// A poisoned store lock means the server cannot recover, so the client
    /// is redirected to the error page instead.
    pub(crate) fn into_alert_response(self) -> Response {
        if self == Error::StoreLockError {
            return get_internal_server_error_redirect();
        }

        let (status_code, message, details) = match &self {
            Error::EmptyPersonName | Error::PersonNameContainsComma(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid name".to_owned(),
                self.to_string(),
            ),
            Error::NoPeople => (
                StatusCode::BAD_REQUEST,
                "Please add people first before adding an expense!".to_owned(),
                String::new(),
            ),
            Error::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid amount".to_owned(),
                format!("{self}. The amount must be at least {}.", crate::MIN_AMOUNT),
            ),
            Error::InvalidDate(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid expense date".to_owned(),
                self.to_string(),
            ),
            Error::InvalidCategory(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid category".to_owned(),
                self.to_string(),
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
