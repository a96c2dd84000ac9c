//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router,
    extract::FromRef,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState, Error,
    auth::{AuthState, auth_guard, post_log_in, post_log_out, register_user},
    endpoints,
    finance::{
        create_finance_endpoint, delete_finance_endpoint, edit_finance_endpoint,
        filter_finances_endpoint, get_category_stats_endpoint, get_finance_endpoint,
        get_monthly_stats_endpoint, get_report_endpoint, get_summary_endpoint,
        list_finances_endpoint,
    },
    message::Message,
    reminder::{
        create_reminder_endpoint, delete_reminder_endpoint, edit_reminder_endpoint,
        get_reminder_endpoint, list_reminders_endpoint,
    },
    user::get_current_user_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::USERS, post(register_user))
        .route(endpoints::LOG_IN, post(post_log_in))
        .route(endpoints::LOG_OUT, post(post_log_out));

    let protected_routes = Router::new()
        .route(endpoints::CURRENT_USER, get(get_current_user_endpoint))
        .route(
            endpoints::FINANCES,
            get(list_finances_endpoint).post(create_finance_endpoint),
        )
        .route(
            endpoints::FINANCE,
            get(get_finance_endpoint)
                .put(edit_finance_endpoint)
                .delete(delete_finance_endpoint),
        )
        .route(endpoints::FINANCES_FILTER, get(filter_finances_endpoint))
        .route(endpoints::FINANCES_SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::FINANCES_CATEGORY_STATS,
            get(get_category_stats_endpoint),
        )
        .route(
            endpoints::FINANCES_MONTHLY_STATS,
            get(get_monthly_stats_endpoint),
        )
        .route(endpoints::FINANCES_REPORT, get(get_report_endpoint))
        .route(
            endpoints::REMINDERS,
            get(list_reminders_endpoint).post(create_reminder_endpoint),
        )
        .route(
            endpoints::REMINDER,
            get(get_reminder_endpoint)
                .put(edit_reminder_endpoint)
                .delete(delete_reminder_endpoint),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState::from_ref(&state),
            auth_guard,
        ));

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Message::json("I'm a teapot")).into_response()
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}
