//! Implements a struct that holds the state of the server.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Error, expense::ExpenseStore, people::PeopleStore, timezone::get_local_offset};

/// The file name of the people table inside the data directory.
pub const PEOPLE_FILE_NAME: &str = "people.csv";

/// The file name of the expenses table inside the data directory.
pub const EXPENSES_FILE_NAME: &str = "expenses.csv";

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,

    /// The symbol shown in front of amounts, e.g. "₹".
    pub currency_symbol: String,

    /// The roster of people who can pay for or share an expense.
    pub people_store: Arc<Mutex<PeopleStore>>,

    /// The recorded expenses.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl AppState {
    /// Create a new [AppState] with the tables stored in `data_dir`.
    ///
    /// `data_dir` is created if it does not exist. The table files themselves
    /// are only created on the first write.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns an error if the timezone is not recognised or the data directory
    /// cannot be created.
    pub fn new(
        data_dir: &Path,
        local_timezone: &str,
        currency_symbol: &str,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        std::fs::create_dir_all(data_dir)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            currency_symbol: currency_symbol.to_owned(),
            people_store: Arc::new(Mutex::new(PeopleStore::new(
                data_dir.join(PEOPLE_FILE_NAME),
            ))),
            expense_store: Arc::new(Mutex::new(ExpenseStore::new(
                data_dir.join(EXPENSES_FILE_NAME),
            ))),
        })
    }
}
