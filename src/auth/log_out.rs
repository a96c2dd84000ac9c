use axum::Json;
use axum_extra::extract::PrivateCookieJar;

use crate::{auth::cookie::invalidate_auth_cookie, message::Message};

/// Invalidate the auth cookie. Succeeds whether or not the client was logged in.
pub async fn post_log_out(jar: PrivateCookieJar) -> (PrivateCookieJar, Json<Message>) {
    (invalidate_auth_cookie(jar), Message::json("logged out"))
}
