//! File operations for expenses.

use std::path::{Path, PathBuf};

use crate::{
    Error,
    expense::{
        Expense, NewExpense,
        domain::{
            format_amount, format_date, format_split, parse_amount, parse_date, parse_split,
        },
    },
    table::Table,
};

pub const DATE_COLUMN: &str = "Date";
pub const CATEGORY_COLUMN: &str = "Category";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const NOTE_COLUMN: &str = "Note";
pub const PAID_BY_COLUMN: &str = "Paid By";
pub const SPLIT_BETWEEN_COLUMN: &str = "Split Between";

/// The columns of the expenses table, in the order they are written to a new file.
pub const EXPENSE_COLUMNS: [&str; 6] = [
    DATE_COLUMN,
    CATEGORY_COLUMN,
    AMOUNT_COLUMN,
    NOTE_COLUMN,
    PAID_BY_COLUMN,
    SPLIT_BETWEEN_COLUMN,
];

/// What had to be repaired while loading the expenses table.
///
/// Repairs never drop a row: absent columns are filled with empty strings,
/// unparseable amounts become 0.0 and unparseable dates become `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Expected columns that were absent from the file.
    pub backfilled_columns: Vec<&'static str>,
    /// Rows whose non-blank amount could not be parsed.
    pub defaulted_amounts: usize,
    /// Rows whose non-blank date could not be parsed.
    pub unparsed_dates: usize,
}

impl LoadReport {
    /// Whether the table loaded without any repairs.
    pub fn is_clean(&self) -> bool {
        self.backfilled_columns.is_empty()
            && self.defaulted_amounts == 0
            && self.unparsed_dates == 0
    }
}

/// Positions of the expected columns in a table.
struct Columns {
    date: usize,
    category: usize,
    amount: usize,
    note: usize,
    paid_by: usize,
    split_between: usize,
}

/// Append-only expense records, stored as a CSV table.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the CSV file at `path`.
    ///
    /// The file does not need to exist yet, it is created on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the CSV file backing the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every expense in file order.
    ///
    /// A missing or empty file gives an empty list. Any repairs made while
    /// loading are logged as warnings, see [ExpenseStore::load_with_report].
    pub fn load(&self) -> Result<Vec<Expense>, Error> {
        let (expenses, report) = self.load_with_report()?;

        if !report.is_clean() {
            tracing::warn!(
                "Repaired expenses table {:?} while loading: {report:?}",
                self.path
            );
        }

        Ok(expenses)
    }

    /// Load every expense and report what had to be repaired.
    pub fn load_with_report(&self) -> Result<(Vec<Expense>, LoadReport), Error> {
        let (table, columns, backfilled_columns) = self.read_table()?;
        let mut report = LoadReport {
            backfilled_columns,
            ..Default::default()
        };

        let expenses = table
            .rows()
            .iter()
            .map(|row| {
                let raw_amount = &row[columns.amount];
                let amount = parse_amount(raw_amount).unwrap_or_else(|| {
                    if !raw_amount.trim().is_empty() {
                        report.defaulted_amounts += 1;
                    }
                    0.0
                });

                let raw_date = &row[columns.date];
                let date = parse_date(raw_date);
                if date.is_none() && !raw_date.trim().is_empty() {
                    report.unparsed_dates += 1;
                }

                Expense {
                    date,
                    category: row[columns.category].clone(),
                    amount,
                    note: row[columns.note].clone(),
                    paid_by: row[columns.paid_by].clone(),
                    split_between: parse_split(&row[columns.split_between]),
                }
            })
            .collect();

        Ok((expenses, report))
    }

    /// Append one expense and write the whole table back.
    ///
    /// Existing amounts and dates are written back normalised the same way
    /// [ExpenseStore::load] reads them, except that a date which cannot be
    /// parsed is written back as it was. Columns that are not part of the expense schema are kept
    /// with an empty value for the new row. The cost of each call grows with
    /// the size of the table.
    ///
    /// Neither the payer nor the people sharing the expense are checked
    /// against the roster.
    pub fn append(&self, expense: NewExpense) -> Result<(), Error> {
        let (mut table, columns, _) = self.read_table()?;

        table.update_column(columns.amount, |amount| {
            format_amount(parse_amount(amount).unwrap_or(0.0))
        });
        table.update_column(columns.date, |date| {
            parse_date(date)
                .map(format_date)
                .unwrap_or_else(|| date.to_owned())
        });

        let mut row = vec![String::new(); table.headers().len()];
        row[columns.date] = format_date(expense.date);
        row[columns.category] = expense.category.to_string();
        row[columns.amount] = format_amount(expense.amount);
        row[columns.note] = expense.note;
        row[columns.paid_by] = expense.paid_by.to_string();
        row[columns.split_between] = format_split(&expense.split_between);

        table.push_row(row);
        table.write(&self.path)?;

        tracing::debug!(
            "Appended expense, {} rows in {:?}",
            table.rows().len(),
            self.path
        );

        Ok(())
    }

    /// Read the table and backfill any expected column that is missing.
    ///
    /// A missing or empty file becomes an empty table with the expected
    /// columns, which does not count as backfilling.
    fn read_table(&self) -> Result<(Table, Columns, Vec<&'static str>), Error> {
        let mut table = Table::read(&self.path)?;

        if table.headers().is_empty() {
            table = Table::new(&EXPENSE_COLUMNS);
        }

        let mut backfilled_columns = Vec::new();
        let mut column = |name: &'static str| {
            if table.column_index(name).is_none() {
                backfilled_columns.push(name);
            }
            table.ensure_column(name)
        };

        let columns = Columns {
            date: column(DATE_COLUMN),
            category: column(CATEGORY_COLUMN),
            amount: column(AMOUNT_COLUMN),
            note: column(NOTE_COLUMN),
            paid_by: column(PAID_BY_COLUMN),
            split_between: column(SPLIT_BETWEEN_COLUMN),
        };

        Ok((table, columns, backfilled_columns))
    }
}
