//! The endpoint for adding a person to the roster.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    alert::Alert,
    home::{PageState, render_app},
    people::{AddOutcome, PersonName, domain::PersonFormData},
};

/// Handle the add person form submission.
///
/// Responds with the re-rendered `#app` element and a success alert, or a
/// warning alert if the person is already in the roster.
pub async fn create_person_endpoint(
    State(state): State<PageState>,
    Form(form): Form<PersonFormData>,
) -> Response {
    let name = match PersonName::new(&form.name) {
        Ok(name) => name,
        Err(error) => return error.into_alert_response(),
    };

    let outcome = state
        .people_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire people store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
        .and_then(|people| people.add(name.clone()));

    let alert = match outcome {
        Ok((_, AddOutcome::Added)) => {
            tracing::info!("Added {name} to the roster");
            Alert::SuccessSimple {
                message: format!("Added {name}"),
            }
        }
        Ok((_, AddOutcome::Duplicate)) => Alert::Warning {
            message: format!("{name} already exists!"),
            details: String::new(),
        },
        Err(error) => {
            tracing::error!("An unexpected error occurred while adding {name}: {error}");
            return error.into_alert_response();
        }
    };

    match render_app(&state, Some(alert)) {
        Ok(app) => app.into_response(),
        Err(error) => error.into_alert_response(),
    }
}
