//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/finances/{finance_id}', use [format_endpoint].

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route to register new users.
pub const USERS: &str = "/api/users";
/// The route to get the logged in user.
pub const CURRENT_USER: &str = "/api/users/me";
/// The route for logging in a user.
pub const LOG_IN: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";

/// The route to list and create finance records.
pub const FINANCES: &str = "/api/finances";
/// The route to access a single finance record.
pub const FINANCE: &str = "/api/finances/{finance_id}";
/// The route to filter finance records by type, month and year.
pub const FINANCES_FILTER: &str = "/api/finances/filter";
/// The route for the income, expense and balance totals.
pub const FINANCES_SUMMARY: &str = "/api/finances/summary";
/// The route for per-category totals.
pub const FINANCES_CATEGORY_STATS: &str = "/api/finances/category-stats";
/// The route for per-month totals of a year.
pub const FINANCES_MONTHLY_STATS: &str = "/api/finances/monthly-stats";
/// The route for reports over a date range.
pub const FINANCES_REPORT: &str = "/api/finances/report";

/// The route to list and create reminders.
pub const REMINDERS: &str = "/api/reminders";
/// The route to access a single reminder.
pub const REMINDER: &str = "/api/reminders/{reminder_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "{uri} is not a valid URI");
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::COFFEE);
        assert_endpoint_is_valid_uri(endpoints::USERS);
        assert_endpoint_is_valid_uri(endpoints::CURRENT_USER);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN);
        assert_endpoint_is_valid_uri(endpoints::LOG_OUT);
        assert_endpoint_is_valid_uri(endpoints::FINANCES);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::FINANCE, 1));
        assert_endpoint_is_valid_uri(endpoints::FINANCES_FILTER);
        assert_endpoint_is_valid_uri(endpoints::FINANCES_SUMMARY);
        assert_endpoint_is_valid_uri(endpoints::FINANCES_CATEGORY_STATS);
        assert_endpoint_is_valid_uri(endpoints::FINANCES_MONTHLY_STATS);
        assert_endpoint_is_valid_uri(endpoints::FINANCES_REPORT);
        assert_endpoint_is_valid_uri(endpoints::REMINDERS);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::REMINDER, 1));
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 42);

        assert_eq!(formatted_path, "/hello/42/bye");
    }

    #[test]
    fn negative_id() {
        assert_eq!(format_endpoint(endpoints::FINANCE, -3), "/api/finances/-3");
    }
}
