//! The endpoint URIs.
//!
//! The API endpoints answer htmx requests with HTML fragments rather than JSON.

/// The home page with the sidebar forms, the summary and the expense table.
pub const ROOT: &str = "/";
/// The page to display when an unexpected error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for adding a person (POST) or removing one (DELETE, `?name=`).
pub const PEOPLE_API: &str = "/api/people";
/// The route for adding an expense.
pub const EXPENSES_API: &str = "/api/expenses";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::PEOPLE_API);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES_API);
    }

    #[test]
    fn remove_person_query_is_valid_uri() {
        assert_endpoint_is_valid_uri(&format!("{}?name=Alice", endpoints::PEOPLE_API));
    }
}
