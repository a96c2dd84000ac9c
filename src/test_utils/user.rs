use rusqlite::Connection;

use crate::{
    auth::PasswordHash,
    user::{User, create_user},
};

/// The password of every user created by [insert_test_user].
pub(crate) const TEST_PASSWORD: &str = "tiger-ladder-92-kettle-vapour";

/// Insert a user with [TEST_PASSWORD], hashed with the lowest bcrypt cost to keep tests fast.
#[track_caller]
pub(crate) fn insert_test_user(connection: &Connection, email: &str) -> User {
    let password_hash =
        PasswordHash::from_raw_password(TEST_PASSWORD, 4).expect("Could not hash test password");

    create_user(
        email.parse().expect("Invalid test email"),
        password_hash,
        connection,
    )
    .expect("Could not create test user")
}
