//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;
/// The ID of a finance record.
pub type FinanceId = DatabaseId;
/// The ID of a bill reminder.
pub type ReminderId = DatabaseId;
