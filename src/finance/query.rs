//! Parses query string parameters into an immutable [FinanceQuery].

use std::ops::Range;

use serde::Deserialize;
use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime, Time, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::{
    Error,
    finance::{FinanceQuery, FinanceType, SortOrder},
    user::UserID,
};

/// The raw query parameters of the filter endpoint.
///
/// Every parameter is read as text so that malformed values produce a JSON
/// error instead of a plain text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// An integer from 1 to 12.
    pub month: Option<String>,
    /// A four digit year.
    pub year: Option<String>,
}

/// The raw query parameters of the report endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    /// The first day of the report as `DD-MM-YYYY`.
    pub start_date: Option<String>,
    /// The last day of the report as `DD-MM-YYYY`.
    pub end_date: Option<String>,
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Report dates are written day first, e.g. "31-01-2025".
const REPORT_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]-[month]-[year]");

/// Parse the `type` parameter.
///
/// # Errors
/// Returns [Error::InvalidQuery] if `raw` is not `income` or `expense`.
pub fn parse_kind(raw: &str) -> Result<FinanceType, Error> {
    raw.parse().map_err(|_| Error::InvalidQuery {
        param: "type",
        reason: format!("expected \"income\" or \"expense\", got \"{raw}\""),
    })
}

/// Parse a four digit year between 1000 and 9999.
///
/// # Errors
/// Returns [Error::InvalidQuery] naming `param` for anything else.
pub fn parse_year(raw: &str, param: &'static str) -> Result<i32, Error> {
    let invalid = || Error::InvalidQuery {
        param,
        reason: format!("expected a four digit year, got \"{raw}\""),
    };

    if raw.len() != 4 || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<i32>() {
        Ok(year) if (1000..=9999).contains(&year) => Ok(year),
        _ => Err(invalid()),
    }
}

/// Parse a month number between 1 and 12.
///
/// # Errors
/// Returns [Error::InvalidQuery] for anything else.
pub fn parse_month(raw: &str) -> Result<Month, Error> {
    raw.parse::<u8>()
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .ok_or_else(|| Error::InvalidQuery {
            param: "month",
            reason: format!("expected a month from 1 to 12, got \"{raw}\""),
        })
}

/// Parse a `DD-MM-YYYY` date.
///
/// # Errors
/// Returns [Error::InvalidQuery] naming `param` if `raw` is not a real date in that format.
pub fn parse_report_date(raw: &str, param: &'static str) -> Result<Date, Error> {
    Date::parse(raw, REPORT_DATE_FORMAT).map_err(|_| Error::InvalidQuery {
        param,
        reason: format!("expected a date formatted as DD-MM-YYYY, got \"{raw}\""),
    })
}

fn start_of_day(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

/// Midnight at the end of `date`, or the last representable instant for the last supported date.
fn start_of_next_day(date: Date) -> OffsetDateTime {
    match date.next_day() {
        Some(next_day) => start_of_day(next_day),
        None => PrimitiveDateTime::new(date, Time::MAX).assume_utc(),
    }
}

/// The half-open UTC range covering every instant of `year`.
pub fn year_range(year: i32) -> Result<Range<OffsetDateTime>, Error> {
    let invalid_year = |error: time::error::ComponentRange| Error::InvalidQuery {
        param: "year",
        reason: error.to_string(),
    };
    let first_day = Date::from_calendar_date(year, Month::January, 1).map_err(invalid_year)?;
    let last_day = Date::from_calendar_date(year, Month::December, 31).map_err(invalid_year)?;

    Ok(start_of_day(first_day)..start_of_next_day(last_day))
}

/// The half-open UTC range covering every instant of `month` in `year`.
///
/// December ends at the first instant of January of the following year.
pub fn month_range(year: i32, month: Month) -> Result<Range<OffsetDateTime>, Error> {
    let first_day = Date::from_calendar_date(year, month, 1).map_err(|error| Error::InvalidQuery {
        param: "month",
        reason: error.to_string(),
    })?;

    let next_month_start = match month {
        Month::December => Date::from_calendar_date(year + 1, Month::January, 1),
        month => Date::from_calendar_date(year, month.next(), 1),
    };
    let end = match next_month_start {
        Ok(date) => start_of_day(date),
        // Only December 9999 has no following month.
        Err(_) => PrimitiveDateTime::new(Date::MAX, Time::MAX).assume_utc(),
    };

    Ok(start_of_day(first_day)..end)
}

/// The value of an optional query parameter, where an empty value such as
/// `?type=` counts as absent.
pub fn query_value(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|raw| !raw.is_empty())
}

/// Build the query for the filter endpoint.
///
/// A `month` narrows the `year` range; without a `year` the month is taken
/// from `current_year`. Results are newest first.
///
/// # Errors
/// Returns [Error::InvalidQuery] for malformed parameters.
pub fn filter_query(
    user_id: UserID,
    params: &FilterParams,
    current_year: i32,
) -> Result<FinanceQuery, Error> {
    let kind = query_value(&params.kind).map(parse_kind).transpose()?;
    let year = query_value(&params.year)
        .map(|raw| parse_year(raw, "year"))
        .transpose()?;
    let month = query_value(&params.month).map(parse_month).transpose()?;

    let created_range = match (year, month) {
        (year, Some(month)) => Some(month_range(year.unwrap_or(current_year), month)?),
        (Some(year), None) => Some(year_range(year)?),
        (None, None) => None,
    };

    Ok(FinanceQuery {
        user_id,
        kind,
        created_range,
        sort: Some(SortOrder::Descending),
    })
}

/// Build the query for the report endpoint.
///
/// Both dates are inclusive of the whole day. Missing dates leave that side of
/// the range open. Results are oldest first.
///
/// # Errors
/// Returns [Error::InvalidQuery] for malformed parameters or if the start date
/// is after the end date.
pub fn report_query(user_id: UserID, params: &ReportParams) -> Result<FinanceQuery, Error> {
    let kind = query_value(&params.kind).map(parse_kind).transpose()?;
    let start_date = query_value(&params.start_date)
        .map(|raw| parse_report_date(raw, "start_date"))
        .transpose()?;
    let end_date = query_value(&params.end_date)
        .map(|raw| parse_report_date(raw, "end_date"))
        .transpose()?;

    let created_range = match (start_date, end_date) {
        (Some(start_date), Some(end_date)) if start_date > end_date => {
            return Err(Error::InvalidQuery {
                param: "start_date",
                reason: "must not be after end_date".to_owned(),
            });
        }
        (None, None) => None,
        (start_date, end_date) => {
            let start = start_date
                .map(start_of_day)
                .unwrap_or(PrimitiveDateTime::MIN.assume_utc());
            let end = end_date
                .map(start_of_next_day)
                .unwrap_or(PrimitiveDateTime::MAX.assume_utc());

            Some(start..end)
        }
    };

    Ok(FinanceQuery {
        user_id,
        kind,
        created_range,
        sort: Some(SortOrder::Ascending),
    })
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::datetime};

    use crate::{
        Error,
        finance::{FinanceType, SortOrder},
        user::UserID,
    };

    use super::{
        FilterParams, ReportParams, filter_query, month_range, parse_month, parse_year,
        report_query, year_range,
    };

    fn filter(kind: Option<&str>, month: Option<&str>, year: Option<&str>) -> FilterParams {
        FilterParams {
            kind: kind.map(str::to_owned),
            month: month.map(str::to_owned),
            year: year.map(str::to_owned),
        }
    }

    #[test]
    fn year_must_have_four_digits() {
        assert_eq!(parse_year("2025", "year"), Ok(2025));
        assert!(parse_year("999", "year").is_err());
        assert!(parse_year("0999", "year").is_err());
        assert!(parse_year("20255", "year").is_err());
        assert!(parse_year("+202", "year").is_err());
        assert!(parse_year("abcd", "year").is_err());
    }

    #[test]
    fn month_must_be_between_one_and_twelve() {
        assert_eq!(parse_month("1"), Ok(Month::January));
        assert_eq!(parse_month("12"), Ok(Month::December));
        assert!(matches!(
            parse_month("0"),
            Err(Error::InvalidQuery { param: "month", .. })
        ));
        assert!(parse_month("13").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn year_range_is_half_open() {
        let range = year_range(2024).unwrap();

        assert_eq!(range.start, datetime!(2024-01-01 00:00 UTC));
        assert_eq!(range.end, datetime!(2025-01-01 00:00 UTC));
    }

    #[test]
    fn month_range_handles_leap_february() {
        let range = month_range(2024, Month::February).unwrap();

        assert_eq!(range.start, datetime!(2024-02-01 00:00 UTC));
        assert_eq!(range.end, datetime!(2024-03-01 00:00 UTC));
    }

    #[test]
    fn december_rolls_over_to_next_year() {
        let range = month_range(2024, Month::December).unwrap();

        assert_eq!(range.start, datetime!(2024-12-01 00:00 UTC));
        assert_eq!(range.end, datetime!(2025-01-01 00:00 UTC));
    }

    #[test]
    fn filter_with_no_params_is_unbounded_and_newest_first() {
        let query = filter_query(UserID::new(1), &FilterParams::default(), 2025).unwrap();

        assert_eq!(query.user_id, UserID::new(1));
        assert_eq!(query.kind, None);
        assert_eq!(query.created_range, None);
        assert_eq!(query.sort, Some(SortOrder::Descending));
    }

    #[test]
    fn filter_month_without_year_uses_current_year() {
        let params = filter(None, Some("3"), None);

        let query = filter_query(UserID::new(1), &params, 2023).unwrap();

        assert_eq!(
            query.created_range,
            Some(month_range(2023, Month::March).unwrap())
        );
    }

    #[test]
    fn filter_month_replaces_year_range() {
        let query = filter_query(
            UserID::new(1),
            &filter(Some("income"), Some("12"), Some("2022")),
            2025,
        )
        .unwrap();

        assert_eq!(query.kind, Some(FinanceType::Income));
        assert_eq!(
            query.created_range,
            Some(datetime!(2022-12-01 00:00 UTC)..datetime!(2023-01-01 00:00 UTC))
        );
    }

    #[test]
    fn filter_rejects_unknown_type() {
        let result = filter_query(UserID::new(1), &filter(Some("gift"), None, None), 2025);

        assert!(matches!(
            result,
            Err(Error::InvalidQuery { param: "type", .. })
        ));
    }

    #[test]
    fn report_dates_cover_whole_days() {
        let params = ReportParams {
            start_date: Some("01-02-2025".to_owned()),
            end_date: Some("28-02-2025".to_owned()),
            kind: Some("expense".to_owned()),
        };

        let query = report_query(UserID::new(1), &params).unwrap();

        assert_eq!(query.kind, Some(FinanceType::Expense));
        assert_eq!(
            query.created_range,
            Some(datetime!(2025-02-01 00:00 UTC)..datetime!(2025-03-01 00:00 UTC))
        );
        assert_eq!(query.sort, Some(SortOrder::Ascending));
    }

    #[test]
    fn report_with_only_end_date_is_open_at_start() {
        let params = ReportParams {
            end_date: Some("31-12-2024".to_owned()),
            ..Default::default()
        };

        let range = report_query(UserID::new(1), &params)
            .unwrap()
            .created_range
            .unwrap();

        assert!(range.start < datetime!(1000-01-01 00:00 UTC));
        assert_eq!(range.end, datetime!(2025-01-01 00:00 UTC));
    }

    #[test]
    fn report_rejects_start_after_end() {
        let params = ReportParams {
            start_date: Some("02-01-2025".to_owned()),
            end_date: Some("01-01-2025".to_owned()),
            kind: None,
        };

        assert!(matches!(
            report_query(UserID::new(1), &params),
            Err(Error::InvalidQuery {
                param: "start_date",
                ..
            })
        ));
    }

    #[test]
    fn filter_treats_empty_values_as_absent() {
        let query =
            filter_query(UserID::new(1), &filter(Some(""), Some(""), Some("")), 2025).unwrap();

        assert_eq!(query.kind, None);
        assert_eq!(query.created_range, None);
        assert_eq!(query.sort, Some(SortOrder::Descending));
    }

    #[test]
    fn report_treats_empty_values_as_absent() {
        let params = ReportParams {
            start_date: Some(String::new()),
            end_date: Some(String::new()),
            kind: Some(String::new()),
        };

        let query = report_query(UserID::new(1), &params).unwrap();

        assert_eq!(query.kind, None);
        assert_eq!(query.created_range, None);
    }

    #[test]
    fn report_rejects_iso_dates() {
        let params = ReportParams {
            start_date: Some("2025-01-01".to_owned()),
            ..Default::default()
        };

        assert!(report_query(UserID::new(1), &params).is_err());
    }
}
