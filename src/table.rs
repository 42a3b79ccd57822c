//! Reading and writing the CSV tables that back the stores.
//!
//! A table is a CSV file with a header row naming its columns. A file that
//! does not exist, or that has no header row, is read as an empty table with
//! no columns. Rows shorter than the header are padded with empty strings,
//! and a row wider than the header adds unnamed columns so no cell is lost.

use std::{fs::File, io::ErrorKind, path::Path};

use crate::Error;

/// The header and rows of a CSV table, with every row as wide as the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column names and no rows.
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|header| header.as_ref().to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    /// Read the table stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [Error::Io] if the file exists but cannot be opened and
    /// [Error::Csv] if its contents are not valid UTF-8 CSV.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!("No table at {path:?}, treating it as empty");
                return Ok(Self::default());
            }
            Err(error) => return Err(error.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        if headers.iter().all(String::is_empty) {
            tracing::debug!("Table at {path:?} has no header row, treating it as empty");
            return Ok(Self::default());
        }

        let mut table = Self::new(headers.as_slice());

        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(str::to_owned).collect());
        }

        if table.headers.len() > headers.len() {
            tracing::warn!(
                "Table at {path:?} has rows wider than its header, added {} unnamed columns",
                table.headers.len() - headers.len()
            );
        }

        Ok(table)
    }

    /// Overwrite the file at `path` with the header and all rows.
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(&self.headers)?;

        for row in &self.rows {
            writer.write_record(row)?;
        }

        writer.flush()?;

        Ok(())
    }

    /// The column names, in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The rows, in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The position of the column called `name`, if the table has one.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Add the column `name` filled with empty strings if it is missing.
    ///
    /// Returns the position of the column.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }

        self.headers.push(name.to_owned());
        for row in &mut self.rows {
            row.push(String::new());
        }

        self.headers.len() - 1
    }

    /// Append a row, padding it to the width of the header.
    ///
    /// A row wider than the header adds unnamed columns, which every other
    /// row gets an empty cell for.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        if row.len() > self.headers.len() {
            self.headers.resize(row.len(), String::new());
            for existing in &mut self.rows {
                existing.resize(row.len(), String::new());
            }
        }

        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Replace the cell in `column` of every row with the result of `f`.
    pub fn update_column(&mut self, column: usize, mut f: impl FnMut(&str) -> String) {
        for row in &mut self.rows {
            row[column] = f(&row[column]);
        }
    }
}
