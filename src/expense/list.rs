//! The summary cards, category breakdown and table of all expenses.

use maud::{Markup, html};

use crate::{
    expense::{
        Expense,
        chart::{category_chart, chart_view},
        domain::format_date,
        summary::{ExpenseSummary, summarise},
    },
    html::{
        PERSON_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
};

/// Render the summary and the expense table, or a notice if there are no expenses.
pub fn expenses_view(expenses: &[Expense], currency_symbol: &str) -> Markup {
    let Some(summary) = summarise(expenses) else {
        return html!(
            p
                id="no-expenses"
                class="p-4 rounded-lg text-blue-800 bg-blue-50 dark:bg-gray-800 dark:text-blue-400"
            {
                "No expenses recorded yet. Use the sidebar to add your first one!"
            }
        );
    };

    html!(
        (summary_view(&summary, currency_symbol))
        (expense_table_view(expenses, currency_symbol))
    )
}

fn summary_view(summary: &ExpenseSummary, currency_symbol: &str) -> Markup {
    let cards = [
        ("Total Spent", format_currency(currency_symbol, summary.total)),
        (
            "Average per Expense",
            format_currency(currency_symbol, summary.average),
        ),
        ("Expenses", summary.count.to_string()),
    ];

    html!(
        section id="summary" class="w-full space-y-4"
        {
            h2 class="text-xl font-bold" { "Summary" }

            div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                @for (label, value) in &cards {
                    div class="rounded-lg bg-white p-4 shadow-sm dark:bg-gray-800"
                    {
                        p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                        p class="text-2xl font-semibold tabular-nums" { (value) }
                    }
                }
            }

            div class="grid grid-cols-1 lg:grid-cols-3 gap-4"
            {
                div class="lg:col-span-2"
                {
                    (chart_view(&category_chart(&summary.by_category)))
                }

                ul id="category-totals" class="space-y-2"
                {
                    @for category_total in &summary.by_category {
                        li class="flex justify-between rounded bg-white px-4 py-2 shadow-sm dark:bg-gray-800"
                        {
                            span { (category_total.category) }
                            span class="tabular-nums"
                            {
                                (format_currency(currency_symbol, category_total.total))
                            }
                        }
                    }
                }
            }
        }
    )
}

fn expense_table_view(expenses: &[Expense], currency_symbol: &str) -> Markup {
    let table_row = |expense: &Expense| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    @match expense.date {
                        Some(date) => {
                            time datetime=(format_date(date)) { (format_date(date)) }
                        }
                        None => {
                            span class="text-gray-400" { "-" }
                        }
                    }
                }
                td class=(TABLE_CELL_STYLE) { (expense.category) }
                td class={(TABLE_CELL_STYLE) " text-right tabular-nums"}
                {
                    (format_currency(currency_symbol, expense.amount))
                }
                td class=(TABLE_CELL_STYLE) { (expense.note) }
                td class=(TABLE_CELL_STYLE) { (expense.paid_by) }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex flex-wrap gap-1"
                    {
                        @for name in &expense.split_between {
                            span class=(PERSON_BADGE_STYLE) { (name) }
                        }
                    }
                }
            }
        )
    };

    html!(
        section class="w-full space-y-4 overflow-x-auto"
        {
            h2 class="text-xl font-bold" { "All Expenses" }

            table id="expenses" class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Note" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Paid By" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Split Between" }
                    }
                }

                tbody
                {
                    @for expense in expenses {
                        (table_row(expense))
                    }
                }
            }
        }
    )
}
