//! The endpoint for recording a new expense.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    Error, MIN_AMOUNT,
    alert::Alert,
    expense::{Category, NewExpense, domain::parse_date},
    home::{PageState, render_app},
    html::format_currency,
    people::PersonName,
};

/// The form data for a new expense.
///
/// `split_between` is sent once per checked person, so the form is extracted
/// with `axum_extra`'s [Form], which collects repeated fields. The amount is
/// kept as text so that a non-numeric amount is rejected with an alert rather
/// than by the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub amount: String,
    #[serde(default)]
    pub note: String,
    /// Missing when the roster is empty, since the select has no options.
    #[serde(default)]
    pub paid_by: String,
    #[serde(default)]
    pub split_between: Vec<String>,
}

/// Handle the add expense form submission.
///
/// The payer and split are not checked against the roster, but the roster
/// must not be empty.
pub async fn create_expense_endpoint(
    State(state): State<PageState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    match add_expense(&state, form) {
        Ok(alert) => match render_app(&state, Some(alert)) {
            Ok(app) => app.into_response(),
            Err(error) => error.into_alert_response(),
        },
        Err(error) => error.into_alert_response(),
    }
}

fn add_expense(state: &PageState, form: ExpenseForm) -> Result<Alert, Error> {
    let has_people = state
        .people_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire people store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .load()
        .map(|people| !people.is_empty())?;
    if !has_people {
        return Err(Error::NoPeople);
    }

    let expense = validate_form(form)?;
    let details = format!(
        "{} on {} paid by {}",
        format_currency(&state.currency_symbol, expense.amount),
        expense.category,
        expense.paid_by
    );

    state
        .expense_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .append(expense)
        .inspect_err(|error| {
            tracing::error!("An unexpected error occurred while adding an expense: {error}")
        })?;

    tracing::info!("Added expense: {details}");

    Ok(Alert::Success {
        message: "Expense added!".to_owned(),
        details,
    })
}

fn validate_form(form: ExpenseForm) -> Result<NewExpense, Error> {
    let amount = form
        .amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= MIN_AMOUNT)
        .ok_or_else(|| Error::InvalidAmount(form.amount.clone()))?;

    let date = parse_date(&form.date).ok_or_else(|| Error::InvalidDate(form.date.clone()))?;
    let category = form.category.parse::<Category>()?;
    let paid_by = PersonName::new(&form.paid_by)?;
    let split_between = form
        .split_between
        .iter()
        .map(|name| PersonName::new(name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NewExpense {
        date,
        category,
        amount,
        note: form.note,
        paid_by,
        split_between,
    })
}
