//! Route handlers that read finance records: list, get by ID and filter.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use time::OffsetDateTime;

use crate::{
    Error,
    app_state::DatabaseState,
    database_id::FinanceId,
    finance::{Finance, FinanceQuery, FilterParams, filter_query, get_finance, query_finances},
    user::UserID,
};

/// A route handler for listing all of the caller's finance records in insertion order.
pub async fn list_finances_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<Vec<Finance>>, Error> {
    let connection = state.lock()?;
    let finances = query_finances(&FinanceQuery::new(user_id), &connection)?;

    Ok(Json(finances))
}

/// A route handler for getting one of the caller's finance records.
pub async fn get_finance_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    finance_id: Result<Path<FinanceId>, PathRejection>,
) -> Result<Json<Finance>, Error> {
    let Path(finance_id) = finance_id?;

    let connection = state.lock()?;
    let finance = get_finance(finance_id, user_id, &connection)?;

    Ok(Json(finance))
}

/// A route handler for the caller's finance records filtered by type, month and year, newest first.
pub async fn filter_finances_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<Vec<Finance>>, Error> {
    let Query(params) = params?;
    let query = filter_query(user_id, &params, OffsetDateTime::now_utc().year())?;

    let connection = state.lock()?;
    let finances = query_finances(&query, &connection)?;

    Ok(Json(finances))
}
