use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error, app_state::DatabaseState, database_id::FinanceId, finance::delete_finance,
    message::Message, user::UserID,
};

/// A route handler for deleting one of the caller's finance records.
pub async fn delete_finance_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    finance_id: Result<Path<FinanceId>, PathRejection>,
) -> Result<Json<Message>, Error> {
    let Path(finance_id) = finance_id?;

    let connection = state.lock()?;
    delete_finance(finance_id, user_id, &connection)?;
    tracing::debug!("Deleted finance record {finance_id} for user {user_id}");

    Ok(Message::json(format!("finance record {finance_id} deleted")))
}
