//! Defines the core data model and database queries for bill reminders.

use rusqlite::{Connection, Row, params_from_iter, types::Value};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    database_id::ReminderId,
    finance::{validate_amount, validate_title},
    timestamp::{self, from_unix_millis, to_unix_millis},
    user::UserID,
};

// ============================================================================
// MODELS
// ============================================================================

/// A bill that is due on a certain date.
///
/// To create a new `Reminder`, use [Reminder::build] and [create_reminder].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// The ID of the reminder.
    pub id: ReminderId,
    /// The user that owns the reminder.
    pub user_id: UserID,
    /// What the bill is for.
    pub title: String,
    /// How much is owed.
    pub amount: f64,
    /// When the bill has to be paid.
    #[serde(with = "crate::timestamp::date_format")]
    pub due_date: Date,
    /// Whether the bill has been paid.
    pub is_paid: bool,
    /// When the reminder was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the reminder was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Reminder {
    /// Create a new, unpaid reminder.
    ///
    /// Shortcut for [ReminderBuilder] for discoverability.
    pub fn build(title: &str, amount: f64, due_date: Date) -> ReminderBuilder {
        ReminderBuilder {
            title: title.to_owned(),
            amount,
            due_date,
            is_paid: false,
        }
    }
}

/// A builder for new [Reminder]s.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderBuilder {
    /// What the bill is for, must not be blank.
    pub title: String,
    /// How much is owed, must be finite.
    pub amount: f64,
    /// When the bill has to be paid.
    pub due_date: Date,
    /// Defaults to `false`.
    pub is_paid: bool,
}

impl ReminderBuilder {
    /// Set whether the bill has already been paid.
    pub fn is_paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }
}

/// The fields of a reminder that may be changed. `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderUpdate {
    /// The new title, must not be blank.
    pub title: Option<String>,
    /// The new amount, must be finite.
    pub amount: Option<f64>,
    /// The new due date.
    pub due_date: Option<Date>,
    /// The new paid status.
    pub is_paid: Option<bool>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const REMINDER_COLUMNS: &str = "id, user_id, title, amount, due_date, is_paid, created_at, updated_at";

/// Validate `builder` and store it as a reminder owned by `user_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidField] if the title is blank or the amount is not finite,
/// - [Error::NotFound] if `user_id` does not refer to a registered user,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_reminder(
    builder: ReminderBuilder,
    user_id: UserID,
    connection: &Connection,
) -> Result<Reminder, Error> {
    let title = validate_title(&builder.title)?;
    let amount = validate_amount(builder.amount)?;
    let now = to_unix_millis(timestamp::now());

    connection
        .prepare(&format!(
            "INSERT INTO reminder (user_id, title, amount, due_date, is_paid, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
             RETURNING {REMINDER_COLUMNS}"
        ))?
        .query_row(
            (
                user_id.as_i64(),
                title,
                amount,
                builder.due_date,
                builder.is_paid,
                now,
            ),
            map_reminder_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
                },
                _,
            ) => Error::NotFound,
            error => error.into(),
        })
}

/// Retrieve the reminder `id` if it belongs to `user_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not exist or belongs to another user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_reminder(
    id: ReminderId,
    user_id: UserID,
    connection: &Connection,
) -> Result<Reminder, Error> {
    let reminder = connection
        .prepare(&format!(
            "SELECT {REMINDER_COLUMNS} FROM reminder WHERE id = :id AND user_id = :user_id"
        ))?
        .query_one(
            &[(":id", &id), (":user_id", &user_id.as_i64())],
            map_reminder_row,
        )?;

    Ok(reminder)
}

/// Get the reminders of `user_id`, soonest due first.
///
/// Pass `is_paid` to only get paid or unpaid reminders.
///
/// # Errors
/// This function will return a [Error::SqlError] there is a SQL error.
pub fn query_reminders(
    user_id: UserID,
    is_paid: Option<bool>,
    connection: &Connection,
) -> Result<Vec<Reminder>, Error> {
    let mut query_string = format!("SELECT {REMINDER_COLUMNS} FROM reminder WHERE user_id = ?1");
    let mut query_parameters = vec![Value::Integer(user_id.as_i64())];

    if let Some(is_paid) = is_paid {
        query_string.push_str(" AND is_paid = ?2");
        query_parameters.push(Value::Integer(is_paid.into()));
    }

    query_string.push_str(" ORDER BY due_date ASC, id ASC");

    connection
        .prepare(&query_string)?
        .query_map(params_from_iter(query_parameters.iter()), map_reminder_row)?
        .map(|reminder_result| reminder_result.map_err(Error::from))
        .collect()
}

/// Apply `update` to the reminder `id` if it belongs to `user_id` and refresh its `updated_at`.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidField] if a new title or amount is invalid,
/// - [Error::NotFound] if `id` does not exist or belongs to another user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_reminder(
    id: ReminderId,
    user_id: UserID,
    update: ReminderUpdate,
    connection: &Connection,
) -> Result<Reminder, Error> {
    let title = update.title.as_deref().map(validate_title).transpose()?;
    let amount = update.amount.map(validate_amount).transpose()?;

    let reminder = connection
        .prepare(&format!(
            "UPDATE reminder SET
                title = COALESCE(?1, title),
                amount = COALESCE(?2, amount),
                due_date = COALESCE(?3, due_date),
                is_paid = COALESCE(?4, is_paid),
                updated_at = MAX(?5, created_at)
             WHERE id = ?6 AND user_id = ?7
             RETURNING {REMINDER_COLUMNS}"
        ))?
        .query_row(
            (
                title,
                amount,
                update.due_date,
                update.is_paid,
                to_unix_millis(timestamp::now()),
                id,
                user_id.as_i64(),
            ),
            map_reminder_row,
        )?;

    Ok(reminder)
}

/// Delete the reminder `id` if it belongs to `user_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not exist or belongs to another user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_reminder(
    id: ReminderId,
    user_id: UserID,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM reminder WHERE id = ?1 AND user_id = ?2",
        (id, user_id.as_i64()),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Create the reminder table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_reminder_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS reminder (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                due_date TEXT NOT NULL,
                is_paid INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_reminder_user_due ON reminder(user_id, due_date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Reminder.
pub fn map_reminder_row(row: &Row) -> Result<Reminder, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = row.get(1)?;
    let title = row.get(2)?;
    let amount = row.get(3)?;
    let due_date = row.get(4)?;
    let is_paid = row.get(5)?;
    let created_at = from_unix_millis(row.get(6)?, 6)?;
    let updated_at = from_unix_millis(row.get(7)?, 7)?;

    Ok(Reminder {
        id,
        user_id: UserID::new(user_id),
        title,
        amount,
        due_date,
        is_paid,
        created_at,
        updated_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================
