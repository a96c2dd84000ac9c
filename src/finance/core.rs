//! Defines the core data models and database queries for finance records.

use std::{fmt::Display, ops::Range, str::FromStr};

use rusqlite::{
    Connection, Row, ToSql, params_from_iter,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::FinanceId,
    timestamp::{self, from_unix_millis, to_unix_millis},
    user::UserID,
};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinanceType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl FinanceType {
    /// The name used in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            FinanceType::Income => "income",
            FinanceType::Expense => "expense",
        }
    }
}

impl FromStr for FinanceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(FinanceType::Income),
            "expense" => Ok(FinanceType::Expense),
            other => Err(Error::InvalidField {
                field: "type",
                reason: format!("expected \"income\" or \"expense\", got \"{other}\""),
            }),
        }
    }
}

/// What a finance record was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Category {
    Salary,
    Education,
    Health,
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Others,
}

impl Category {
    /// Every category, in the order used for display.
    pub const ALL: [Category; 8] = [
        Category::Salary,
        Category::Education,
        Category::Health,
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Utilities,
        Category::Others,
    ];

    /// The name used in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Education => "education",
            Category::Health => "health",
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Others => "others",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::InvalidField {
                field: "category",
                reason: format!("\"{s}\" is not a known category"),
            })
    }
}

macro_rules! impl_text_column {
    ($type:ty) => {
        impl Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ToSql for $type {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $type {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
            }
        }
    };
}

impl_text_column!(FinanceType);
impl_text_column!(Category);

/// A single income or expense belonging to one user.
///
/// To create a new `Finance`, use [Finance::build] and [create_finance].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finance {
    /// The ID of the record.
    pub id: FinanceId,
    /// The user that owns the record.
    pub user_id: UserID,
    /// A short description of the record.
    pub title: String,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub kind: FinanceType,
    /// What the money was for.
    pub category: Category,
    /// When the record was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the record was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Finance {
    /// Create a new finance record.
    ///
    /// Shortcut for [FinanceBuilder] for discoverability.
    pub fn build(title: &str, amount: f64, kind: FinanceType, category: Category) -> FinanceBuilder {
        FinanceBuilder {
            title: title.to_owned(),
            amount,
            kind,
            category,
            created_at: None,
        }
    }
}

/// A builder for new [Finance] records.
///
/// The record is validated and stored by [create_finance].
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceBuilder {
    /// A short description, must not be blank.
    pub title: String,
    /// The amount of money, must be finite.
    pub amount: f64,
    /// Whether the money was earned or spent.
    pub kind: FinanceType,
    /// What the money was for.
    pub category: Category,
    /// Defaults to the time the record is stored.
    pub created_at: Option<OffsetDateTime>,
}

impl FinanceBuilder {
    /// Backdate the record, e.g. when seeding a database.
    pub fn created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// The fields of a finance record that may be changed. `None` leaves the
/// stored value as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceUpdate {
    /// The new title, must not be blank.
    pub title: Option<String>,
    /// The new amount, must be finite.
    pub amount: Option<f64>,
    /// The new type.
    pub kind: Option<FinanceType>,
    /// The new category.
    pub category: Option<Category>,
}

/// Trim `title` and reject it if nothing is left.
///
/// # Errors
/// Returns [Error::InvalidField] for blank titles.
pub fn validate_title(title: &str) -> Result<String, Error> {
    let title = title.trim();

    if title.is_empty() {
        return Err(Error::InvalidField {
            field: "title",
            reason: "must not be blank".to_owned(),
        });
    }

    Ok(title.to_owned())
}

/// Reject amounts that are NaN or infinite.
///
/// # Errors
/// Returns [Error::InvalidField] for non-finite amounts.
pub fn validate_amount(amount: f64) -> Result<f64, Error> {
    if !amount.is_finite() {
        return Err(Error::InvalidField {
            field: "amount",
            reason: "must be a finite number".to_owned(),
        });
    }

    Ok(amount)
}

// ============================================================================
// QUERIES
// ============================================================================

/// The order to sort finance records by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

/// Defines which finance records to fetch with [query_finances].
///
/// All criteria are combined with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceQuery {
    /// Only records owned by this user are returned.
    pub user_id: UserID,
    /// Only include records of this type.
    pub kind: Option<FinanceType>,
    /// Only include records created within this half-open range.
    pub created_range: Option<Range<OffsetDateTime>>,
    /// Orders records by creation time, ties broken by ID in the same direction.
    /// `None` returns records in insertion order.
    pub sort: Option<SortOrder>,
}

impl FinanceQuery {
    /// A query for every record of `user_id` in insertion order.
    pub fn new(user_id: UserID) -> Self {
        Self {
            user_id,
            kind: None,
            created_range: None,
            sort: None,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const FINANCE_COLUMNS: &str = "id, user_id, title, amount, type, category, created_at, updated_at";

/// Validate `builder` and store it as a record owned by `user_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidField] if the title is blank or the amount is not finite,
/// - [Error::NotFound] if `user_id` does not refer to a registered user,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_finance(
    builder: FinanceBuilder,
    user_id: UserID,
    connection: &Connection,
) -> Result<Finance, Error> {
    let title = validate_title(&builder.title)?;
    let amount = validate_amount(builder.amount)?;
    let created_at = builder.created_at.unwrap_or_else(timestamp::now);
    let now = timestamp::now();

    connection
        .prepare(&format!(
            "INSERT INTO finance (user_id, title, amount, type, category, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {FINANCE_COLUMNS}"
        ))?
        .query_row(
            (
                user_id.as_i64(),
                title,
                amount,
                builder.kind,
                builder.category,
                to_unix_millis(created_at),
                to_unix_millis(now.max(created_at)),
            ),
            map_finance_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
                },
                _,
            ) => Error::NotFound,
            error => error.into(),
        })
}

/// Retrieve the record `id` if it belongs to `user_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not exist or belongs to another user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_finance(id: FinanceId, user_id: UserID, connection: &Connection) -> Result<Finance, Error> {
    let finance = connection
        .prepare(&format!(
            "SELECT {FINANCE_COLUMNS} FROM finance WHERE id = :id AND user_id = :user_id"
        ))?
        .query_one(
            &[(":id", &id), (":user_id", &user_id.as_i64())],
            map_finance_row,
        )?;

    Ok(finance)
}

/// Apply `update` to the record `id` if it belongs to `user_id` and refresh its `updated_at`.
///
/// The ownership check and the update happen in a single statement.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidField] if a new title or amount is invalid,
/// - [Error::NotFound] if `id` does not exist or belongs to another user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_finance(
    id: FinanceId,
    user_id: UserID,
    update: FinanceUpdate,
    connection: &Connection,
) -> Result<Finance, Error> {
    let title = update.title.as_deref().map(validate_title).transpose()?;
    let amount = update.amount.map(validate_amount).transpose()?;

    let finance = connection
        .prepare(&format!(
            "UPDATE finance SET
                title = COALESCE(?1, title),
                amount = COALESCE(?2, amount),
                type = COALESCE(?3, type),
                category = COALESCE(?4, category),
                updated_at = MAX(?5, created_at)
             WHERE id = ?6 AND user_id = ?7
             RETURNING {FINANCE_COLUMNS}"
        ))?
        .query_row(
            (
                title,
                amount,
                update.kind,
                update.category,
                to_unix_millis(timestamp::now()),
                id,
                user_id.as_i64(),
            ),
            map_finance_row,
        )?;

    Ok(finance)
}

/// Delete the record `id` if it belongs to `user_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not exist or belongs to another user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_finance(id: FinanceId, user_id: UserID, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM finance WHERE id = ?1 AND user_id = ?2",
        (id, user_id.as_i64()),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Query for finance records in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is a SQL error.
pub fn query_finances(query: &FinanceQuery, connection: &Connection) -> Result<Vec<Finance>, Error> {
    let mut query_string_parts = vec![format!("SELECT {FINANCE_COLUMNS} FROM finance")];
    let mut where_clause_parts = vec!["user_id = ?1".to_owned()];
    let mut query_parameters = vec![Value::Integer(query.user_id.as_i64())];

    if let Some(kind) = query.kind {
        where_clause_parts.push(format!("type = ?{}", query_parameters.len() + 1));
        query_parameters.push(Value::Text(kind.as_str().to_owned()));
    }

    if let Some(range) = &query.created_range {
        where_clause_parts.push(format!(
            "created_at >= ?{} AND created_at < ?{}",
            query_parameters.len() + 1,
            query_parameters.len() + 2,
        ));
        query_parameters.push(Value::Integer(to_unix_millis(range.start)));
        query_parameters.push(Value::Integer(to_unix_millis(range.end)));
    }

    query_string_parts.push(String::from("WHERE ") + &where_clause_parts.join(" AND "));

    match query.sort {
        Some(SortOrder::Ascending) => {
            query_string_parts.push("ORDER BY created_at ASC, id ASC".to_owned())
        }
        Some(SortOrder::Descending) => {
            query_string_parts.push("ORDER BY created_at DESC, id DESC".to_owned())
        }
        None => query_string_parts.push("ORDER BY id ASC".to_owned()),
    }

    let query_string = query_string_parts.join(" ");
    let params = params_from_iter(query_parameters.iter());

    connection
        .prepare(&query_string)?
        .query_map(params, map_finance_row)?
        .map(|finance_result| finance_result.map_err(Error::from))
        .collect()
}

/// Create the finance table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_finance_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    let categories = Category::ALL
        .iter()
        .map(|category| format!("'{category}'"))
        .collect::<Vec<_>>()
        .join(", ");

    connection.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS finance (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                type TEXT NOT NULL CHECK (type IN ('income', 'expense')),
                category TEXT NOT NULL CHECK (category IN ({categories})),
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )"
        ),
        (),
    )?;

    // Used by the filter and report queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_finance_user_created ON finance(user_id, created_at);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Finance.
pub fn map_finance_row(row: &Row) -> Result<Finance, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = row.get(1)?;
    let title = row.get(2)?;
    let amount = row.get(3)?;
    let kind = row.get(4)?;
    let category = row.get(5)?;
    let created_at = from_unix_millis(row.get(6)?, 6)?;
    let updated_at = from_unix_millis(row.get(7)?, 7)?;

    Ok(Finance {
        id,
        user_id: UserID::new(user_id),
        title,
        amount,
        kind,
        category,
        created_at,
        updated_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::{Duration, macros::datetime};

    use crate::{
        Error,
        db::initialize,
        finance::{
            Category, Finance, FinanceQuery, FinanceType, FinanceUpdate, SortOrder,
            create_finance, delete_finance, get_finance, query_finances, update_finance,
        },
        test_utils::insert_test_user,
        user::UserID,
    };

    fn get_test_connection() -> (Connection, UserID, UserID) {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let owner = insert_test_user(&conn, "owner@example.com").id;
        let other = insert_test_user(&conn, "other@example.com").id;

        (conn, owner, other)
    }

    fn lunch() -> crate::finance::FinanceBuilder {
        Finance::build("Lunch", 12.5, FinanceType::Expense, Category::Food)
    }

    #[test]
    fn create_succeeds() {
        let (conn, owner, _) = get_test_connection();

        let finance = create_finance(lunch(), owner, &conn).unwrap();

        assert!(finance.id > 0);
        assert_eq!(finance.user_id, owner);
        assert_eq!(finance.title, "Lunch");
        assert_eq!(finance.amount, 12.5);
        assert_eq!(finance.kind, FinanceType::Expense);
        assert_eq!(finance.category, Category::Food);
        assert_eq!(finance.created_at, finance.updated_at);
    }

    #[test]
    fn create_trims_title() {
        let (conn, owner, _) = get_test_connection();

        let finance = create_finance(
            Finance::build("  Rent  ", 900.0, FinanceType::Expense, Category::Utilities),
            owner,
            &conn,
        )
        .unwrap();

        assert_eq!(finance.title, "Rent");
    }

    #[test]
    fn create_fails_on_blank_title() {
        let (conn, owner, _) = get_test_connection();

        let result = create_finance(
            Finance::build("   ", 1.0, FinanceType::Income, Category::Salary),
            owner,
            &conn,
        );

        assert!(matches!(
            result,
            Err(Error::InvalidField { field: "title", .. })
        ));
    }

    #[test]
    fn create_fails_on_non_finite_amount() {
        let (conn, owner, _) = get_test_connection();

        let result = create_finance(
            Finance::build("Bad", f64::NAN, FinanceType::Income, Category::Salary),
            owner,
            &conn,
        );

        assert!(matches!(
            result,
            Err(Error::InvalidField { field: "amount", .. })
        ));
    }

    #[test]
    fn create_accepts_zero_amount() {
        let (conn, owner, _) = get_test_connection();

        let result = create_finance(
            Finance::build("Free sample", 0.0, FinanceType::Expense, Category::Food),
            owner,
            &conn,
        );

        assert!(result.is_ok());
    }

    #[test]
    fn create_fails_for_missing_user() {
        let (conn, _, _) = get_test_connection();

        let result = create_finance(lunch(), UserID::new(999), &conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn get_returns_created_record() {
        let (conn, owner, _) = get_test_connection();
        let want = create_finance(lunch(), owner, &conn).unwrap();

        let got = get_finance(want.id, owner, &conn).unwrap();

        assert_eq!(got, want);
    }

    #[test]
    fn get_fails_for_other_user() {
        let (conn, owner, other) = get_test_connection();
        let finance = create_finance(lunch(), owner, &conn).unwrap();

        assert_eq!(get_finance(finance.id, other, &conn), Err(Error::NotFound));
    }

    #[test]
    fn update_changes_only_given_fields() {
        let (conn, owner, _) = get_test_connection();
        let created_at = datetime!(2024-01-01 00:00 UTC);
        let finance = create_finance(lunch().created_at(created_at), owner, &conn).unwrap();

        let updated = update_finance(
            finance.id,
            owner,
            FinanceUpdate {
                amount: Some(20.0),
                category: Some(Category::Entertainment),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        assert_eq!(updated.title, finance.title);
        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.kind, finance.kind);
        assert_eq!(updated.category, Category::Entertainment);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at >= finance.updated_at);
        assert_eq!(get_finance(finance.id, owner, &conn), Ok(updated));
    }

    #[test]
    fn update_with_no_fields_only_refreshes_updated_at() {
        let (conn, owner, _) = get_test_connection();
        let finance = create_finance(
            lunch().created_at(datetime!(2024-01-01 00:00 UTC)),
            owner,
            &conn,
        )
        .unwrap();

        let updated = update_finance(finance.id, owner, FinanceUpdate::default(), &conn).unwrap();

        assert_eq!(
            Finance {
                updated_at: finance.updated_at,
                ..updated.clone()
            },
            finance
        );
        assert!(updated.updated_at >= finance.updated_at);
    }

    #[test]
    fn update_fails_for_other_user() {
        let (conn, owner, other) = get_test_connection();
        let finance = create_finance(lunch(), owner, &conn).unwrap();

        let result = update_finance(
            finance.id,
            other,
            FinanceUpdate {
                title: Some("Stolen".to_owned()),
                ..Default::default()
            },
            &conn,
        );

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(get_finance(finance.id, owner, &conn), Ok(finance));
    }

    #[test]
    fn update_fails_on_blank_title() {
        let (conn, owner, _) = get_test_connection();
        let finance = create_finance(lunch(), owner, &conn).unwrap();

        let result = update_finance(
            finance.id,
            owner,
            FinanceUpdate {
                title: Some("".to_owned()),
                ..Default::default()
            },
            &conn,
        );

        assert!(matches!(
            result,
            Err(Error::InvalidField { field: "title", .. })
        ));
    }

    #[test]
    fn delete_removes_record() {
        let (conn, owner, _) = get_test_connection();
        let finance = create_finance(lunch(), owner, &conn).unwrap();

        delete_finance(finance.id, owner, &conn).unwrap();

        assert_eq!(get_finance(finance.id, owner, &conn), Err(Error::NotFound));
        assert_eq!(delete_finance(finance.id, owner, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_fails_for_other_user() {
        let (conn, owner, other) = get_test_connection();
        let finance = create_finance(lunch(), owner, &conn).unwrap();

        assert_eq!(delete_finance(finance.id, other, &conn), Err(Error::NotFound));
        assert!(get_finance(finance.id, owner, &conn).is_ok());
    }

    #[test]
    fn deleting_user_deletes_their_records() {
        let (conn, owner, _) = get_test_connection();
        create_finance(lunch(), owner, &conn).unwrap();

        conn.execute("DELETE FROM user WHERE id = ?1", (owner.as_i64(),))
            .unwrap();

        let remaining: i64 = conn
            .query_row("SELECT COUNT(id) FROM finance", [], |row| row.get(0))
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[test]
    fn check_constraint_rejects_unknown_category() {
        let (conn, owner, _) = get_test_connection();

        let result = conn.execute(
            "INSERT INTO finance (user_id, title, amount, type, category, created_at, updated_at)
             VALUES (?1, 'x', 1.0, 'income', 'lottery', 0, 0)",
            (owner.as_i64(),),
        );

        assert!(result.is_err());
    }

    #[test]
    fn query_is_scoped_to_user_in_insertion_order() {
        let (conn, owner, other) = get_test_connection();
        let first = create_finance(lunch(), owner, &conn).unwrap();
        create_finance(lunch(), other, &conn).unwrap();
        let second = create_finance(lunch(), owner, &conn).unwrap();

        let got = query_finances(&FinanceQuery::new(owner), &conn).unwrap();

        assert_eq!(got, vec![first, second]);
    }

    #[test]
    fn query_filters_by_type_and_range() {
        let (conn, owner, _) = get_test_connection();
        let start = datetime!(2025-03-01 00:00 UTC);
        let end = datetime!(2025-04-01 00:00 UTC);
        let salary = Finance::build("Pay", 1000.0, FinanceType::Income, Category::Salary);
        create_finance(salary.clone().created_at(start - Duration::milliseconds(1)), owner, &conn)
            .unwrap();
        let in_range = create_finance(salary.clone().created_at(start), owner, &conn).unwrap();
        create_finance(lunch().created_at(start), owner, &conn).unwrap();
        create_finance(salary.created_at(end), owner, &conn).unwrap();

        let got = query_finances(
            &FinanceQuery {
                kind: Some(FinanceType::Income),
                created_range: Some(start..end),
                ..FinanceQuery::new(owner)
            },
            &conn,
        )
        .unwrap();

        assert_eq!(got, vec![in_range]);
    }

    #[test]
    fn query_sorts_by_created_at_then_id() {
        let (conn, owner, _) = get_test_connection();
        let early = datetime!(2025-01-01 00:00 UTC);
        let late = datetime!(2025-06-01 00:00 UTC);
        let a = create_finance(lunch().created_at(late), owner, &conn).unwrap();
        let b = create_finance(lunch().created_at(early), owner, &conn).unwrap();
        let c = create_finance(lunch().created_at(late), owner, &conn).unwrap();

        let descending = query_finances(
            &FinanceQuery {
                sort: Some(SortOrder::Descending),
                ..FinanceQuery::new(owner)
            },
            &conn,
        )
        .unwrap();
        let ascending = query_finances(
            &FinanceQuery {
                sort: Some(SortOrder::Ascending),
                ..FinanceQuery::new(owner)
            },
            &conn,
        )
        .unwrap();

        assert_eq!(descending, vec![c.clone(), a.clone(), b.clone()]);
        assert_eq!(ascending, vec![b, a, c]);
    }
}
