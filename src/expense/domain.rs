//! Core expense domain types and the coercions applied to stored values.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, people::PersonName};

/// The format dates are stored in, e.g. "2024-01-05".
const ISO_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
/// Dates as spreadsheets tend to write them. Each also accepts zero-padded
/// months and days, e.g. "2024-1-5", "2024/01/05" and "1/5/2024".
const READ_DATE_FORMATS: [&[BorrowedFormatItem]; 3] = [
    format_description!("[year]-[month padding:none]-[day padding:none]"),
    format_description!("[year]/[month padding:none]/[day padding:none]"),
    format_description!("[month padding:none]/[day padding:none]/[year]"),
];

/// The fixed set of categories offered when recording an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, meals out and snacks.
    Food,
    /// Fares, fuel and rides.
    Transport,
    /// Clothes, gifts and other purchases.
    Shopping,
    /// Rent, utilities and subscriptions.
    Bills,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// Every category, in the order they are offered in the form.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// The name of the category as shown in the form and stored in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense as loaded from the expenses table.
///
/// Fields hold whatever the table contained after coercion: the category is
/// not checked against [Category], and the names are not checked against the
/// roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// `None` when the stored date could not be parsed.
    pub date: Option<Date>,
    /// The stored category, which may be any text.
    pub category: String,
    /// 0.0 when the stored amount could not be parsed.
    pub amount: f64,
    /// Free text, may be empty.
    pub note: String,
    /// The name of the person who paid, empty if none was recorded.
    pub paid_by: String,
    /// The names of the people sharing the cost, in stored order.
    pub split_between: Vec<String>,
}

/// A new expense to append to the expenses table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The day the money was spent.
    pub date: Date,
    /// What the money was spent on.
    pub category: Category,
    /// How much was spent.
    pub amount: f64,
    /// Free text, may be empty.
    pub note: String,
    /// The person who paid.
    pub paid_by: PersonName,
    /// The people sharing the cost. May be empty.
    pub split_between: Vec<PersonName>,
}

/// Format `date` as an ISO-8601 calendar date.
pub fn format_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Parse a stored date.
///
/// Accepts "YYYY-MM-DD", "YYYY/MM/DD" and "MM/DD/YYYY", with or without
/// zero padding, and date-times in those formats, of which only the date is
/// kept. Returns `None` for anything else, including blanks.
pub fn parse_date(text: &str) -> Option<Date> {
    let text = text.trim();

    let parse = |text: &str| {
        READ_DATE_FORMATS
            .iter()
            .find_map(|format| Date::parse(text, *format).ok())
    };

    if let Some(date) = parse(text) {
        return Some(date);
    }

    // Date-times such as "2024-01-05T10:30:00" or "1/5/2024 10:30".
    let (date, _time) = text.split_once(['T', ' '])?;
    parse(date)
}

/// Parse a stored amount, returning `None` for blanks, garbage and NaN.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| !amount.is_nan())
}

/// Format an amount for storage so that whole numbers keep one decimal place, e.g. "12.0".
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

/// Split a stored "Split Between" value into names.
///
/// Blank entries are dropped, so an empty cell gives an empty list.
pub fn parse_split(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join names for the "Split Between" column.
pub fn format_split<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        expense::domain::{
            Category, format_amount, format_date, format_split, parse_amount, parse_date,
            parse_split,
        },
    };

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert_eq!(
            "Rent".parse::<Category>(),
            Err(Error::InvalidCategory("Rent".to_owned()))
        );
    }

    #[test]
    fn formats_date_as_iso() {
        assert_eq!(format_date(date!(2024 - 01 - 05)), "2024-01-05");
    }

    #[test]
    fn parses_iso_and_slash_dates() {
        assert_eq!(parse_date("2024-01-05"), Some(date!(2024 - 01 - 05)));
        assert_eq!(parse_date(" 2024/01/05 "), Some(date!(2024 - 01 - 05)));
    }

    #[test]
    fn parses_unpadded_and_us_dates() {
        assert_eq!(parse_date("2024-1-5"), Some(date!(2024 - 01 - 05)));
        assert_eq!(parse_date("2024/1/15"), Some(date!(2024 - 01 - 15)));
        assert_eq!(parse_date("1/5/2024"), Some(date!(2024 - 01 - 05)));
        assert_eq!(parse_date("12/31/2023"), Some(date!(2023 - 12 - 31)));
    }

    #[test]
    fn parses_date_part_of_date_time() {
        assert_eq!(
            parse_date("2024-01-05T10:30:00"),
            Some(date!(2024 - 01 - 05))
        );
        assert_eq!(
            parse_date("2024-01-05 10:30:00"),
            Some(date!(2024 - 01 - 05))
        );
        assert_eq!(parse_date("1/5/2024 10:30"), Some(date!(2024 - 01 - 05)));
    }

    #[test]
    fn unparseable_dates_are_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("2024-01-05Xjunk"), None);
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount("250.5"), Some(250.5));
        assert_eq!(parse_amount(" 12 "), Some(12.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn formats_whole_amounts_with_one_decimal() {
        assert_eq!(format_amount(12.0), "12.0");
        assert_eq!(format_amount(250.5), "250.5");
        assert_eq!(format_amount(0.0), "0.0");
    }

    #[test]
    fn split_keeps_order_and_drops_blanks() {
        assert_eq!(parse_split("Bob,Alice"), ["Bob", "Alice"]);
        assert_eq!(parse_split("Bob, Alice,"), ["Bob", "Alice"]);
        assert!(parse_split("").is_empty());
    }

    #[test]
    fn joins_split_with_commas() {
        assert_eq!(format_split(&["Alice", "Bob"]), "Alice,Bob");
        assert_eq!(format_split::<&str>(&[]), "");
    }
}
