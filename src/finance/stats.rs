//! Aggregates a user's finance records into totals.

use std::collections::BTreeMap;

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app_state::DatabaseState,
    finance::{
        Category, Finance, FinanceQuery, FinanceType, parse_year, query_finances, query_value,
        year_range,
    },
    user::UserID,
};

// ============================================================================
// MODELS
// ============================================================================

/// Income and expense totals over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of the amounts of income records.
    pub total_income: f64,
    /// The sum of the amounts of expense records.
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub balance: f64,
}

impl Summary {
    fn add(&mut self, finance: &Finance) {
        match finance.kind {
            FinanceType::Income => self.total_income += finance.amount,
            FinanceType::Expense => self.total_expense += finance.amount,
        }

        self.balance = self.total_income - self.total_expense;
    }
}

/// The total amount and number of records in one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    /// The sum of the amounts, regardless of type.
    pub total: f64,
    /// How many records are in the category.
    pub count: u64,
}

/// The totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    /// The month number, 1 for January.
    pub month: u8,
    /// The totals for the month.
    #[serde(flatten)]
    pub summary: Summary,
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Total up `finances` by type.
pub fn summarize(finances: &[Finance]) -> Summary {
    finances.iter().fold(Summary::default(), |mut summary, finance| {
        summary.add(finance);
        summary
    })
}

/// Total up `finances` by category. Categories with no records are left out.
pub fn category_stats(finances: &[Finance]) -> BTreeMap<Category, CategoryStat> {
    let mut stats: BTreeMap<Category, CategoryStat> = BTreeMap::new();

    for finance in finances {
        let stat = stats.entry(finance.category).or_default();
        stat.total += finance.amount;
        stat.count += 1;
    }

    stats
}

/// Total up the records created in `year` by UTC month.
///
/// Always returns twelve entries, January first. Records from other years are ignored.
pub fn monthly_stats(finances: &[Finance], year: i32) -> Vec<MonthlyStat> {
    let mut months: Vec<MonthlyStat> = (1..=12)
        .map(|month| MonthlyStat {
            month,
            summary: Summary::default(),
        })
        .collect();

    for finance in finances {
        let created_at = finance.created_at;

        if created_at.year() != year {
            continue;
        }

        let index = u8::from(created_at.month()) as usize - 1;
        months[index].summary.add(finance);
    }

    months
}

// ============================================================================
// ENDPOINTS
// ============================================================================

/// A route handler for the income, expense and balance totals over all of the caller's records.
pub async fn get_summary_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<Summary>, Error> {
    let connection = state.lock()?;
    let finances = query_finances(&FinanceQuery::new(user_id), &connection)?;

    Ok(Json(summarize(&finances)))
}

/// A route handler for per-category totals over all of the caller's records.
pub async fn get_category_stats_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<BTreeMap<Category, CategoryStat>>, Error> {
    let connection = state.lock()?;
    let finances = query_finances(&FinanceQuery::new(user_id), &connection)?;

    Ok(Json(category_stats(&finances)))
}

/// The query parameters of the monthly stats endpoint.
#[derive(Debug, Deserialize)]
pub struct MonthlyStatsParams {
    /// The four digit year to report on.
    pub year: Option<String>,
}

/// A route handler for per-month totals of the caller's records in the requested year.
pub async fn get_monthly_stats_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    params: Result<Query<MonthlyStatsParams>, QueryRejection>,
) -> Result<Json<Vec<MonthlyStat>>, Error> {
    let Query(params) = params?;
    let raw_year = query_value(&params.year).ok_or_else(|| Error::InvalidQuery {
        param: "year",
        reason: "a year is required".to_owned(),
    })?;
    let year = parse_year(raw_year, "year")?;

    let query = FinanceQuery {
        created_range: Some(year_range(year)?),
        ..FinanceQuery::new(user_id)
    };
    let connection = state.lock()?;
    let finances = query_finances(&query, &connection)?;

    Ok(Json(monthly_stats(&finances, year)))
}
