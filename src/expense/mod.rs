//! Recording expenses and summarising what has been spent.

mod chart;
mod create;
mod domain;
mod list;
mod store;
mod summary;

pub use chart::ECHARTS_URL;
pub use create::create_expense_endpoint;
pub use domain::{Category, Expense, NewExpense};
pub use list::expenses_view;
pub use store::{ExpenseStore, LoadReport};
