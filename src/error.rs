//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The email or password given at log-in did not match a registered user.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// The request did not carry a valid, unexpired auth cookie.
    #[error("you must be logged in to access this resource")]
    Unauthorized,

    /// The auth cookie is missing from the cookie jar in the request.
    #[error("no auth cookie in the cookie jar")]
    CookieMissing,

    /// The auth token could not be serialized, deserialized or extended.
    ///
    /// The error string should only be logged on the server.
    #[error("could not process auth token: {0}")]
    CookieError(String),

    /// The user provided a password that is too easy to guess.
    #[error("password is too weak: {0}")]
    TooWeak(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The string given as an email address is not a valid email address.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    /// The email used to register is already in use.
    #[error("the email \"{0}\" is already registered")]
    DuplicateEmail(String),

    /// A required field was missing from the request body.
    #[error("the field \"{0}\" is required")]
    MissingField(&'static str),

    /// A field in the request body had a value that is not allowed.
    #[error("invalid value for \"{field}\": {reason}")]
    InvalidField {
        /// The name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The request body was not valid JSON or had the wrong shape.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    /// A query string parameter could not be parsed or was out of range.
    #[error("invalid query parameter \"{param}\": {reason}")]
    InvalidQuery {
        /// The name of the offending query parameter.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The requested resource was not found.
    ///
    /// Resources owned by another user are reported as not found so that
    /// clients cannot learn whether another user's resource exists.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequestBody(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidQuery {
            param: "query",
            reason: rejection.body_text(),
        }
    }
}

// IDs that are not integers cannot refer to any record.
impl From<PathRejection> for Error {
    fn from(_: PathRejection) -> Self {
        Error::NotFound
    }
}

/// The body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorMessage {
    /// A human readable description of what went wrong.
    pub message: String,
}

impl ErrorMessage {
    /// Wrap `message` in a JSON response with the status code `status`.
    pub fn response(status: StatusCode, message: impl ToString) -> Response {
        (
            status,
            Json(ErrorMessage {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "an unexpected error occurred";

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingField(_)
            | Error::InvalidField { .. }
            | Error::InvalidRequestBody(_)
            | Error::InvalidQuery { .. }
            | Error::InvalidEmail(_)
            | Error::TooWeak(_) => ErrorMessage::response(StatusCode::BAD_REQUEST, self),
            Error::InvalidCredentials | Error::Unauthorized => {
                ErrorMessage::response(StatusCode::UNAUTHORIZED, self)
            }
            Error::NotFound => ErrorMessage::response(StatusCode::NOT_FOUND, self),
            Error::DuplicateEmail(_) => ErrorMessage::response(StatusCode::CONFLICT, self),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorMessage::response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
