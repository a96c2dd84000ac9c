//! Conversions between stored timestamps, [OffsetDateTime] and JSON dates.
//!
//! Record timestamps are stored as INTEGER unix milliseconds so that range
//! queries compare numbers rather than strings.

use rusqlite::types::Type;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

/// The `YYYY-MM-DD` format used for dates in JSON, e.g. reminder due dates.
pub const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The current UTC time truncated to whole milliseconds, the precision of the database.
pub fn now() -> OffsetDateTime {
    from_unix_millis_lossy(to_unix_millis(OffsetDateTime::now_utc()))
}

/// The number of whole milliseconds between the unix epoch and `date_time`.
pub fn to_unix_millis(date_time: OffsetDateTime) -> i64 {
    (date_time.unix_timestamp_nanos() / 1_000_000) as i64
}

/// Convert unix milliseconds read from column `column` back into a UTC date time.
///
/// # Errors
///
/// Returns a [rusqlite::Error::FromSqlConversionFailure] if `millis` is out of
/// the range supported by [OffsetDateTime].
pub fn from_unix_millis(millis: i64, column: usize) -> Result<OffsetDateTime, rusqlite::Error> {
    OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(column, Type::Integer, Box::new(error))
    })
}

fn from_unix_millis_lossy(millis: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// Serde helpers for `YYYY-MM-DD` dates, for use with `#[serde(with = "...")]`.
pub mod date_format {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FORMAT;

    /// Write `date` as `YYYY-MM-DD`.
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    /// Read a `YYYY-MM-DD` date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
