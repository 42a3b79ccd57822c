//! Totals shown above the expense table.

use std::collections::HashMap;

use crate::expense::Expense;

/// The label used for expenses with a blank category.
pub const UNCATEGORISED: &str = "Uncategorised";

/// Spending totals over a list of expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub total: f64,
    pub average: f64,
    pub count: usize,
    /// The total for each category, largest first.
    pub by_category: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Summarise `expenses`, or return `None` if there are none.
pub fn summarise(expenses: &[Expense]) -> Option<ExpenseSummary> {
    if expenses.is_empty() {
        return None;
    }

    let total = expenses.iter().map(|expense| expense.amount).sum::<f64>();
    let count = expenses.len();

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for expense in expenses {
        let category = match expense.category.trim() {
            "" => UNCATEGORISED,
            category => category,
        };
        *totals.entry(category).or_default() += expense.amount;
    }

    let mut by_category = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_owned(),
            total,
        })
        .collect::<Vec<_>>();
    // Ties are broken by name so the order is stable between page loads.
    by_category.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });

    Some(ExpenseSummary {
        total,
        average: total / count as f64,
        count,
        by_category,
    })
}

#[cfg(test)]
mod tests {
    use crate::expense::{
        Expense,
        summary::{CategoryTotal, UNCATEGORISED, summarise},
    };

    fn expense(category: &str, amount: f64) -> Expense {
        Expense {
            date: None,
            category: category.to_owned(),
            amount,
            note: String::new(),
            paid_by: "Alice".to_owned(),
            split_between: vec!["Alice".to_owned()],
        }
    }

    #[test]
    fn no_expenses_has_no_summary() {
        assert_eq!(summarise(&[]), None);
    }

    #[test]
    fn totals_and_average() {
        let expenses = [expense("Food", 10.0), expense("Bills", 30.0)];

        let summary = summarise(&expenses).unwrap();

        assert_eq!(summary.total, 40.0);
        assert_eq!(summary.average, 20.0);
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn categories_sorted_largest_first() {
        let expenses = [
            expense("Food", 10.0),
            expense("Bills", 30.0),
            expense("Food", 5.0),
            expense("Transport", 15.0),
        ];

        let summary = summarise(&expenses).unwrap();

        assert_eq!(
            summary.by_category,
            [
                CategoryTotal {
                    category: "Bills".to_owned(),
                    total: 30.0
                },
                CategoryTotal {
                    category: "Food".to_owned(),
                    total: 15.0
                },
                CategoryTotal {
                    category: "Transport".to_owned(),
                    total: 15.0
                },
            ]
        );
    }

    #[test]
    fn blank_category_is_uncategorised() {
        let summary = summarise(&[expense(" ", 3.0)]).unwrap();

        assert_eq!(summary.by_category[0].category, UNCATEGORISED);
    }
}
