//! Finance record management.
//!
//! This module contains everything related to finance records:
//! - The `Finance` model, its enums and `FinanceBuilder` for creating records
//! - Database functions for storing, querying, updating and deleting records
//! - Query parameter parsing for filters and reports
//! - Aggregation into summaries, category stats and monthly stats
//! - Route handlers for the finance API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod query;
mod report;
mod stats;

pub use core::{
    Category, Finance, FinanceBuilder, FinanceQuery, FinanceType, FinanceUpdate, SortOrder,
    create_finance, create_finance_table, delete_finance, get_finance, map_finance_row,
    query_finances, update_finance, validate_amount, validate_title,
};
pub use create_endpoint::create_finance_endpoint;
pub use delete_endpoint::delete_finance_endpoint;
pub use edit_endpoint::edit_finance_endpoint;
pub use form::FinanceForm;
pub use list_endpoint::{filter_finances_endpoint, get_finance_endpoint, list_finances_endpoint};
pub use query::{
    FilterParams, ReportParams, filter_query, month_range, parse_kind, parse_month,
    parse_report_date, parse_year, query_value, report_query, year_range,
};
pub use report::{Report, ReportEntry, get_report_endpoint};
pub use stats::{
    CategoryStat, MonthlyStat, Summary, category_stats, get_category_stats_endpoint,
    get_monthly_stats_endpoint, get_summary_endpoint, monthly_stats, summarize,
};
