//! Handles log-in requests by checking credentials and setting the auth cookie.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{
    AppState, Error,
    auth::cookie::set_auth_cookie,
    user::{UserProfile, get_user_by_email},
};

/// How long the auth cookie should last if the user selects "remember me" at log-in.
pub const REMEMBER_ME_COOKIE_DURATION: Duration = Duration::days(7);

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LoginState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The database connection for looking up users.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for LoginState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            db_connection: state.db_connection.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LoginState> for Key {
    fn from_ref(state: &LoginState) -> Self {
        state.cookie_key.clone()
    }
}

/// The credentials sent by the client to log in.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInData {
    /// Email entered during log-in.
    pub email: Option<String>,
    /// Password entered during log-in.
    pub password: Option<String>,
    /// Whether to extend the initial auth cookie duration.
    pub remember_me: Option<bool>,
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, the auth cookie is set and the user's
/// profile is returned.
///
/// # Errors
///
/// This function will return an error in a few situations.
/// - A field is missing from the request body.
/// - The email does not belong to a registered user.
/// - The password is not correct.
/// - An internal error occurred when verifying the password.
pub async fn post_log_in(
    State(state): State<LoginState>,
    jar: PrivateCookieJar,
    user_data: Result<Json<LogInData>, JsonRejection>,
) -> Result<(PrivateCookieJar, Json<UserProfile>), Error> {
    let Json(user_data) = user_data?;
    let email = user_data.email.ok_or(Error::MissingField("email"))?;
    let password = user_data.password.ok_or(Error::MissingField("password"))?;

    let user = {
        let connection = state.db_connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })?;

        match get_user_by_email(email.trim(), &connection) {
            Ok(user) => user,
            Err(Error::NotFound) => return Err(Error::InvalidCredentials),
            Err(error) => return Err(error),
        }
    };

    let is_password_valid = user
        .password_hash
        .verify(&password)
        .map_err(|error| Error::HashingError(error.to_string()))?;

    if !is_password_valid {
        return Err(Error::InvalidCredentials);
    }

    let cookie_duration = if user_data.remember_me.unwrap_or(false) {
        REMEMBER_ME_COOKIE_DURATION
    } else {
        state.cookie_duration
    };

    let jar = set_auth_cookie(jar, user.id, cookie_duration)?;
    tracing::info!("User {} logged in", user.id);

    Ok((jar, Json(UserProfile::from(&user))))
}

#[cfg(test)]
mod log_in_tests {
    use serde_json::json;
    use time::{Duration, OffsetDateTime};

    use crate::{
        Error,
        auth::{COOKIE_TOKEN, DEFAULT_COOKIE_DURATION, log_in::REMEMBER_ME_COOKIE_DURATION},
        endpoints,
        error::ErrorMessage,
        test_utils::{TEST_PASSWORD, get_test_server, insert_test_user},
        user::UserProfile,
    };

    #[track_caller]
    fn assert_date_time_close(left: OffsetDateTime, right: OffsetDateTime) {
        assert!(
            (left - right).abs() < Duration::seconds(5),
            "got date time {:?}, want {:?}",
            left,
            right
        );
    }

    #[tokio::test]
    async fn log_in_succeeds_with_valid_credentials() {
        let (server, state) = get_test_server();
        let user = insert_test_user(&state.db_connection.lock().unwrap(), "test@test.com");

        let response = server
            .post(endpoints::LOG_IN)
            .json(&json!({ "email": "test@test.com", "password": TEST_PASSWORD }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<UserProfile>(), UserProfile::from(&user));
        let cookie = response.cookie(COOKIE_TOKEN);
        assert_date_time_close(
            cookie.expires_datetime().unwrap(),
            OffsetDateTime::now_utc() + DEFAULT_COOKIE_DURATION,
        );
    }

    #[tokio::test]
    async fn remember_me_extends_cookie_duration() {
        let (server, state) = get_test_server();
        insert_test_user(&state.db_connection.lock().unwrap(), "test@test.com");

        let response = server
            .post(endpoints::LOG_IN)
            .json(&json!({
                "email": "test@test.com",
                "password": TEST_PASSWORD,
                "rememberMe": true,
            }))
            .await;

        response.assert_status_ok();
        assert_date_time_close(
            response.cookie(COOKIE_TOKEN).expires_datetime().unwrap(),
            OffsetDateTime::now_utc() + REMEMBER_ME_COOKIE_DURATION,
        );
    }

    #[tokio::test]
    async fn log_in_fails_with_wrong_password_or_email() {
        let (server, state) = get_test_server();
        insert_test_user(&state.db_connection.lock().unwrap(), "test@test.com");

        for body in [
            json!({ "email": "test@test.com", "password": "wrongpassword" }),
            json!({ "email": "nobody@test.com", "password": TEST_PASSWORD }),
        ] {
            let response = server.post(endpoints::LOG_IN).json(&body).await;

            response.assert_status_unauthorized();
            assert_eq!(
                response.json::<ErrorMessage>().message,
                Error::InvalidCredentials.to_string()
            );
        }
    }

    #[tokio::test]
    async fn log_in_fails_with_missing_password() {
        let (server, _) = get_test_server();

        server
            .post(endpoints::LOG_IN)
            .json(&json!({ "email": "test@test.com" }))
            .await
            .assert_status_bad_request();
    }
}
