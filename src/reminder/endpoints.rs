//! Route handlers for the reminder API.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    Error,
    app_state::DatabaseState,
    database_id::ReminderId,
    finance::query_value,
    message::Message,
    reminder::{
        Reminder, ReminderForm, create_reminder, delete_reminder, get_reminder, query_reminders,
        update_reminder,
    },
    user::UserID,
};

/// The query parameters of the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListRemindersParams {
    /// `true` or `false`.
    #[serde(rename = "isPaid")]
    pub is_paid: Option<String>,
}

fn parse_is_paid(raw: &str) -> Result<bool, Error> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::InvalidQuery {
            param: "isPaid",
            reason: format!("expected \"true\" or \"false\", got \"{other}\""),
        }),
    }
}

/// A route handler for listing the caller's reminders, soonest due first.
pub async fn list_reminders_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    params: Result<Query<ListRemindersParams>, QueryRejection>,
) -> Result<Json<Vec<Reminder>>, Error> {
    let Query(params) = params?;
    let is_paid = query_value(&params.is_paid)
        .map(parse_is_paid)
        .transpose()?;

    let connection = state.lock()?;
    let reminders = query_reminders(user_id, is_paid, &connection)?;

    Ok(Json(reminders))
}

/// A route handler for getting one of the caller's reminders.
pub async fn get_reminder_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    reminder_id: Result<Path<ReminderId>, PathRejection>,
) -> Result<Json<Reminder>, Error> {
    let Path(reminder_id) = reminder_id?;

    let connection = state.lock()?;
    let reminder = get_reminder(reminder_id, user_id, &connection)?;

    Ok(Json(reminder))
}

/// A route handler for creating a reminder owned by the caller.
pub async fn create_reminder_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    form: Result<Json<ReminderForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Reminder>), Error> {
    let Json(form) = form?;
    let builder = form.into_builder()?;

    let connection = state.lock()?;
    let reminder = create_reminder(builder, user_id, &connection)?;

    Ok((StatusCode::CREATED, Json(reminder)))
}

/// A route handler for partially updating one of the caller's reminders.
pub async fn edit_reminder_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    reminder_id: Result<Path<ReminderId>, PathRejection>,
    form: Result<Json<ReminderForm>, JsonRejection>,
) -> Result<Json<Reminder>, Error> {
    let Path(reminder_id) = reminder_id?;
    let Json(form) = form?;
    let update = form.into_update()?;

    let connection = state.lock()?;
    let reminder = update_reminder(reminder_id, user_id, update, &connection)?;

    Ok(Json(reminder))
}

/// A route handler for deleting one of the caller's reminders.
pub async fn delete_reminder_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    reminder_id: Result<Path<ReminderId>, PathRejection>,
) -> Result<Json<Message>, Error> {
    let Path(reminder_id) = reminder_id?;

    let connection = state.lock()?;
    delete_reminder(reminder_id, user_id, &connection)?;
    tracing::debug!("Deleted reminder {reminder_id} for user {user_id}");

    Ok(Message::json(format!("reminder {reminder_id} deleted")))
}
