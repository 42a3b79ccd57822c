//! The home page: the sidebar forms for managing people and adding expenses,
//! and the summary and table of recorded expenses.
//!
//! The forms post to the API endpoints, which answer with a fresh copy of the
//! `#app` element so the summary and roster update without a full page load.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, MIN_AMOUNT,
    alert::Alert,
    endpoints,
    expense::{Category, ECHARTS_URL, Expense, ExpenseStore, expenses_view},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, HeadElement, SIDEBAR_SECTION_STYLE, base, currency_input_styles,
        loading_spinner,
    },
    people::{PeopleStore, PersonName},
    timezone::local_today,
};

/// The ID of the element replaced after each successful form submission.
pub const APP_ELEMENT_ID: &str = "app";

/// The state needed to render the home page and the `#app` element.
#[derive(Debug, Clone)]
pub struct PageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
    /// The symbol shown in front of amounts.
    pub currency_symbol: String,
    pub people_store: Arc<Mutex<PeopleStore>>,
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for PageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            currency_symbol: state.currency_symbol.clone(),
            people_store: state.people_store.clone(),
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Renders the home page.
pub async fn get_home_page(State(state): State<PageState>) -> Result<Response, Error> {
    let app = render_app(&state, None)?;

    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        currency_input_styles(&state.currency_symbol),
    ];

    Ok(base("Expenses", &head_elements, &app).into_response())
}

/// Load the roster and expenses and render the `#app` element, with `alert`
/// shown at the top of the sidebar.
///
/// # Errors
/// Returns an error if a store lock is poisoned, a table cannot be read, or
/// the configured timezone is invalid.
pub(crate) fn render_app(state: &PageState, alert: Option<Alert>) -> Result<Markup, Error> {
    let people = state
        .people_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire people store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .load()
        .inspect_err(|error| tracing::error!("could not load people: {error}"))?;

    let expenses = state
        .expense_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .load()
        .inspect_err(|error| tracing::error!("could not load expenses: {error}"))?;

    let today = local_today(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    Ok(app_view(
        &people,
        &expenses,
        today,
        &state.currency_symbol,
        alert,
    ))
}

fn app_view(
    people: &[PersonName],
    expenses: &[Expense],
    today: Date,
    currency_symbol: &str,
    alert: Option<Alert>,
) -> Markup {
    html!(
        div
            id=(APP_ELEMENT_ID)
            class="flex flex-col lg:flex-row gap-6 p-4 text-gray-900 dark:text-white"
        {
            aside class="w-full lg:w-80 shrink-0 space-y-4"
            {
                @if let Some(alert) = alert {
                    (alert.into_html())
                }

                (people_forms_view(people))
                (expense_form_view(people, today))
            }

            main class="flex-1 min-w-0 space-y-6"
            {
                h1 class="text-2xl font-bold" { "Expense Tracker" }

                (expenses_view(expenses, currency_symbol))
            }
        }
    )
}

fn people_forms_view(people: &[PersonName]) -> Markup {
    let target = format!("#{APP_ELEMENT_ID}");

    html!(
        section id="manage-people" class=(SIDEBAR_SECTION_STYLE)
        {
            h2 class="text-xl font-bold" { "Manage People" }

            form
                id="add-person-form"
                hx-post=(endpoints::PEOPLE_API)
                hx-target=(target)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="space-y-2"
            {
                label for="new-person-name" class=(FORM_LABEL_STYLE) { "Add Person" }

                input
                    id="new-person-name"
                    type="text"
                    name="name"
                    placeholder="Name"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
            }

            @if people.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400" { "No people added yet." }
            } @else {
                form
                    id="remove-person-form"
                    hx-delete=(endpoints::PEOPLE_API)
                    hx-target=(target)
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class="space-y-2"
                {
                    label for="remove-person-name" class=(FORM_LABEL_STYLE) { "Remove Person" }

                    select
                        id="remove-person-name"
                        name="name"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for person in people {
                            option value=(person) { (person) }
                        }
                    }

                    button type="submit" class=(BUTTON_DELETE_STYLE) { "Remove" }
                }
            }
        }
    )
}

fn expense_form_view(people: &[PersonName], today: Date) -> Markup {
    let target = format!("#{APP_ELEMENT_ID}");
    let spinner = loading_spinner();

    html!(
        section id="add-expense" class=(SIDEBAR_SECTION_STYLE)
        {
            h2 class="text-xl font-bold" { "Add New Expense" }

            form
                id="add-expense-form"
                hx-post=(endpoints::EXPENSES_API)
                hx-target=(target)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="space-y-4"
            {
                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                    input
                        id="date"
                        type="date"
                        name="date"
                        value=(today)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select
                        id="category"
                        name="category"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in Category::ALL {
                            option value=(category) { (category) }
                        }
                    }
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    // w-full needed to ensure input takes the full width when prefilled with a value
                    div class="input-wrapper w-full"
                    {
                        input
                            id="amount"
                            type="number"
                            name="amount"
                            min=(MIN_AMOUNT)
                            step="0.01"
                            placeholder="0.00"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for="note" class=(FORM_LABEL_STYLE) { "Note" }

                    input
                        id="note"
                        type="text"
                        name="note"
                        placeholder="Optional"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="paid_by" class=(FORM_LABEL_STYLE) { "Paid By" }

                    // Not required, so that submitting with an empty roster
                    // reaches the server and explains what is missing.
                    select id="paid_by" name="paid_by" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for person in people {
                            option value=(person) { (person) }
                        }
                    }
                }

                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "Split Between" }

                    div class="space-y-1"
                    {
                        @for (index, person) in people.iter().enumerate() {
                            div class="flex items-center gap-2"
                            {
                                input
                                    id={ "split-" (index) }
                                    type="checkbox"
                                    name="split_between"
                                    value=(person)
                                    checked
                                    class=(FORM_CHECKBOX_STYLE);

                                label for={ "split-" (index) } class="text-sm" { (person) }
                            }
                        }
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " Add Expense"
                }
            }
        }
    )
}
