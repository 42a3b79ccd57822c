use axum::extract::FromRef;
use tempfile::TempDir;

use crate::{AppState, home::PageState};

/// Create an [AppState] with an empty data directory.
///
/// The directory is deleted when the returned [TempDir] is dropped, so keep it
/// alive for the duration of the test.
pub(crate) fn test_app_state() -> (TempDir, AppState) {
    let temp_dir = TempDir::new().expect("Could not create temporary directory");
    let state =
        AppState::new(temp_dir.path(), "Etc/UTC", "₹").expect("Could not create app state");

    (temp_dir, state)
}

pub(crate) fn test_page_state() -> (TempDir, PageState) {
    let (temp_dir, state) = test_app_state();

    (temp_dir, PageState::from_ref(&state))
}
