//! Alert system for displaying success, warning and error messages to users.
//!
//! Alerts are the notice shown after each mutation: success when the change
//! was saved, warning when the request was accepted but nothing changed (e.g.,
//! a duplicate person), and error when the request was rejected.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// A message to display to the user after submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The change was saved.
    Success { message: String, details: String },
    /// The change was saved and there is nothing more to say.
    SuccessSimple { message: String },
    /// The request was valid but did not change anything.
    Warning { message: String, details: String },
    /// The request was rejected or failed.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (SUCCESS_STYLE, message, details),
            Alert::SuccessSimple { message } => (SUCCESS_STYLE, message, String::new()),
            Alert::Warning { message, details } => (WARNING_STYLE, message, details),
            Alert::Error { message, details } => (ERROR_STYLE, message, details),
        };

        html! {
            div
                role="alert"
                class=(container_style)
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    span class="block text-sm" { (details) }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}

const SUCCESS_STYLE: &str = "p-4 mb-4 rounded-lg text-green-800 bg-green-50 \
    dark:bg-gray-800 dark:text-green-400";

const WARNING_STYLE: &str = "p-4 mb-4 rounded-lg text-yellow-800 bg-yellow-50 \
    dark:bg-gray-800 dark:text-yellow-300";

const ERROR_STYLE: &str = "p-4 mb-4 rounded-lg text-red-800 bg-red-50 \
    dark:bg-gray-800 dark:text-red-400";
