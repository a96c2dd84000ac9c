//! Cookie based authentication: registration, log-in, log-out and the auth middleware.

mod cookie;
mod log_in;
mod log_out;
mod middleware;
mod password;
mod register_user;
mod token;

pub use cookie::{
    COOKIE_TOKEN, DEFAULT_COOKIE_DURATION, extend_auth_cookie_duration_if_needed,
    get_token_from_cookies, invalidate_auth_cookie, set_auth_cookie,
};
pub use log_in::{LogInData, LoginState, REMEMBER_ME_COOKIE_DURATION, post_log_in};
pub use log_out::post_log_out;
pub use middleware::{AuthState, auth_guard};
pub use password::{PasswordHash, ValidatedPassword};
pub use register_user::{RegisterForm, RegistrationState, register_user};
pub use token::Token;
