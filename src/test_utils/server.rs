use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::json;

use crate::{
    AppState, auth::COOKIE_TOKEN, build_router, endpoints, test_utils::TEST_PASSWORD,
    user::UserProfile,
};

/// A server for the full router backed by an in-memory database.
///
/// The returned state shares the server's database connection, so tests can
/// seed records directly.
pub(crate) fn get_test_server() -> (TestServer, AppState) {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory database");
    let state = AppState::new(connection, "42").expect("Could not create app state");
    let server =
        TestServer::try_new(build_router(state.clone())).expect("Could not create test server");

    (server, state)
}

/// Register a user with `email` and [TEST_PASSWORD] and return the new
/// profile along with the auth cookie from the registration response.
pub(crate) async fn log_in_new_user(
    server: &TestServer,
    email: &str,
) -> (UserProfile, Cookie<'static>) {
    let response = server
        .post(endpoints::USERS)
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    (response.json::<UserProfile>(), response.cookie(COOKIE_TOKEN))
}
