//! The endpoint for removing a person from the roster.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    alert::Alert,
    home::{PageState, render_app},
    people::domain::PersonFormData,
};

/// Handle the remove person form submission.
///
/// The roster is saved even when `name` is not in it, and the response is the
/// same success alert either way. Expenses naming the person are kept.
pub async fn remove_person_endpoint(
    State(state): State<PageState>,
    Query(form): Query<PersonFormData>,
) -> Response {
    let name = form.name.trim();
    if name.is_empty() {
        return Error::EmptyPersonName.into_alert_response();
    }

    let result = state
        .people_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire people store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
        .and_then(|people| people.remove(name));

    if let Err(error) = result {
        tracing::error!("An unexpected error occurred while removing {name}: {error}");
        return error.into_alert_response();
    }

    tracing::info!("Removed {name} from the roster");
    let alert = Alert::SuccessSimple {
        message: format!("Removed {name}"),
    };

    match render_app(&state, Some(alert)) {
        Ok(app) => app.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod remove_person_endpoint_tests {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use scraper::Selector;

    use crate::{
        people::{PersonName, domain::PersonFormData, remove_person_endpoint},
        test_utils::{
            assert_valid_html, must_get_alert_text, parse_html_fragment, test_page_state,
        },
    };

    fn query(name: &str) -> Query<PersonFormData> {
        Query(PersonFormData {
            name: name.to_owned(),
        })
    }

    #[tokio::test]
    async fn can_remove_person() {
        let (_temp_dir, state) = test_page_state();
        {
            let people = state.people_store.lock().unwrap();
            people.add(PersonName::new_unchecked("Alice")).unwrap();
            people.add(PersonName::new_unchecked("Bob")).unwrap();
        }

        let response = remove_person_endpoint(State(state.clone()), query("Alice")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(must_get_alert_text(&html).0, "Removed Alice");
        assert_eq!(
            state.people_store.lock().unwrap().load().unwrap(),
            [PersonName::new_unchecked("Bob")]
        );

        let remaining = html
            .select(&Selector::parse("#remove-person-name option").unwrap())
            .map(|option| option.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(remaining, ["Bob"]);
    }

    #[tokio::test]
    async fn can_remove_person_padded_in_file() {
        let (_temp_dir, state) = test_page_state();
        let path = state.people_store.lock().unwrap().path().to_owned();
        std::fs::write(&path, "Person\n Alice\nBob\n").unwrap();

        let response = remove_person_endpoint(State(state.clone()), query(" Alice")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            state.people_store.lock().unwrap().load().unwrap(),
            [PersonName::new_unchecked("Bob")]
        );
    }

    #[tokio::test]
    async fn removing_absent_person_succeeds() {
        let (_temp_dir, state) = test_page_state();
        state
            .people_store
            .lock()
            .unwrap()
            .add(PersonName::new_unchecked("Alice"))
            .unwrap();

        let response = remove_person_endpoint(State(state.clone()), query("Zed")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            state.people_store.lock().unwrap().load().unwrap(),
            [PersonName::new_unchecked("Alice")]
        );
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let (_temp_dir, state) = test_page_state();

        let response = remove_person_endpoint(State(state), query("")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
