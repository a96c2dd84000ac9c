//! Handles requests to register a new user.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use email_address::EmailAddress;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{
    AppState, Error,
    auth::{PasswordHash, ValidatedPassword, cookie::set_auth_cookie},
    user::{UserProfile, create_user},
};

/// The state needed to register a user.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The database connection for storing users.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RegistrationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            db_connection: state.db_connection.clone(),
        }
    }
}

impl FromRef<RegistrationState> for Key {
    fn from_ref(state: &RegistrationState) -> Self {
        state.cookie_key.clone()
    }
}

/// The details needed to register.
#[derive(Default, Serialize, Deserialize)]
pub struct RegisterForm {
    /// The email the user will log in with.
    pub email: Option<String>,
    /// The user's chosen password.
    pub password: Option<String>,
}

/// Create a user and log them in.
///
/// # Errors
///
/// Returns a:
/// - [Error::MissingField] if the email or password is missing,
/// - [Error::InvalidEmail] if the email is not a valid address,
/// - [Error::TooWeak] if the password is too easy to guess,
/// - [Error::DuplicateEmail] if the email is already registered.
pub async fn register_user(
    State(state): State<RegistrationState>,
    jar: PrivateCookieJar,
    form: Result<Json<RegisterForm>, JsonRejection>,
) -> Result<(StatusCode, PrivateCookieJar, Json<UserProfile>), Error> {
    let Json(form) = form?;
    let raw_email = form.email.ok_or(Error::MissingField("email"))?;
    let raw_password = form.password.ok_or(Error::MissingField("password"))?;

    let raw_email = raw_email.trim();
    let email: EmailAddress = raw_email
        .parse()
        .map_err(|_| Error::InvalidEmail(raw_email.to_owned()))?;
    let password = ValidatedPassword::new(&raw_password, &[email.as_str()])?;
    let password_hash = PasswordHash::new(password, PasswordHash::DEFAULT_COST)?;

    let user = {
        let connection = state.db_connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })?;

        create_user(email, password_hash, &connection)?
    };
    tracing::info!("Registered user {}", user.id);

    let jar = set_auth_cookie(jar, user.id, state.cookie_duration)?;

    Ok((StatusCode::CREATED, jar, Json(UserProfile::from(&user))))
}
