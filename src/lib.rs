//! Split it is a web app for keeping track of shared expenses.
//!
//! People are added to a roster, and each expense records who paid and who
//! the cost is split between. The roster and the expenses are kept in two CSV
//! files, so the data can be opened and edited in a spreadsheet.
//!
//! This library provides a server that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod error;
mod error_page;
mod expense;
mod home;
mod html;
mod logging;
mod people;
mod routing;
mod table;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, EXPENSES_FILE_NAME, PEOPLE_FILE_NAME};
pub use error::Error;
pub use expense::{Category, Expense, ExpenseStore, LoadReport, NewExpense};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use people::{AddOutcome, PeopleStore, PersonName};
pub use routing::build_router;

/// The smallest amount accepted for a new expense.
pub const MIN_AMOUNT: f64 = 1.0;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
