use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    app_state::DatabaseState,
    finance::{Finance, FinanceForm, create_finance},
    user::UserID,
};

/// A route handler for creating a new finance record owned by the caller.
pub async fn create_finance_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    form: Result<Json<FinanceForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Finance>), Error> {
    let Json(form) = form?;
    let builder = form.into_builder()?;

    let connection = state.lock()?;
    let finance = create_finance(builder, user_id, &connection)?;
    tracing::debug!("Created finance record {} for user {user_id}", finance.id);

    Ok((StatusCode::CREATED, Json(finance)))
}
