//! Reports over a user's finance records between two dates.

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app_state::DatabaseState,
    database_id::FinanceId,
    finance::{Category, Finance, FinanceType, ReportParams, query_finances, report_query},
    user::UserID,
};

/// A finance record as listed in a report, without its owner and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The ID of the finance record.
    pub id: FinanceId,
    /// What the money was for.
    pub title: String,
    /// How much money changed hands.
    pub amount: f64,
    /// Whether the record is income or an expense.
    #[serde(rename = "type")]
    pub kind: FinanceType,
    /// The category the record is filed under.
    pub category: Category,
}

impl From<Finance> for ReportEntry {
    fn from(finance: Finance) -> Self {
        Self {
            id: finance.id,
            title: finance.title,
            amount: finance.amount,
            kind: finance.kind,
            category: finance.category,
        }
    }
}

/// The records in a period and the sum of their amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The sum of the amounts of every entry, regardless of type.
    pub total_amount: f64,
    /// The number of entries.
    pub count: usize,
    /// The entries, oldest first.
    pub data: Vec<ReportEntry>,
}

impl Report {
    /// Build a report from records that are already filtered and sorted.
    pub fn new(finances: Vec<Finance>) -> Self {
        let total_amount = finances.iter().map(|finance| finance.amount).sum();
        let data: Vec<ReportEntry> = finances.into_iter().map(ReportEntry::from).collect();

        Self {
            total_amount,
            count: data.len(),
            data,
        }
    }
}

/// A route handler for a report over the caller's records.
///
/// `start_date` and `end_date` are optional `DD-MM-YYYY` dates that include the whole day.
pub async fn get_report_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    params: Result<Query<ReportParams>, QueryRejection>,
) -> Result<Json<Report>, Error> {
    let Query(params) = params?;
    let query = report_query(user_id, &params)?;

    let connection = state.lock()?;
    let finances = query_finances(&query, &connection)?;

    Ok(Json(Report::new(finances)))
}
