use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    app_state::DatabaseState,
    database_id::FinanceId,
    finance::{Finance, FinanceForm, update_finance},
    user::UserID,
};

/// A route handler for partially updating one of the caller's finance records.
///
/// Fields missing from the body keep their stored values.
pub async fn edit_finance_endpoint(
    State(state): State<DatabaseState>,
    Extension(user_id): Extension<UserID>,
    finance_id: Result<Path<FinanceId>, PathRejection>,
    form: Result<Json<FinanceForm>, JsonRejection>,
) -> Result<Json<Finance>, Error> {
    let Path(finance_id) = finance_id?;
    let Json(form) = form?;
    let update = form.into_update()?;

    let connection = state.lock()?;
    let finance = update_finance(finance_id, user_id, update, &connection)?;

    Ok(Json(finance))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        endpoints::{self, format_endpoint},
        finance::{Category, Finance, FinanceType, create_finance},
        test_utils::{get_test_server, log_in_new_user},
    };

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let (server, state) = get_test_server();
        let (user, cookie) = log_in_new_user(&server, "alice@example.com").await;
        let finance = create_finance(
            Finance::build("Groceries", 80.0, FinanceType::Expense, Category::Food),
            user.id,
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = server
            .put(&format_endpoint(endpoints::FINANCE, finance.id))
            .add_cookie(cookie)
            .json(&json!({ "amount": 95.5, "userId": 12345 }))
            .await;

        response.assert_status_ok();
        let updated = response.json::<Finance>();
        assert_eq!(updated.amount, 95.5);
        assert_eq!(updated.user_id, user.id);
        assert_eq!(updated.title, finance.title);
        assert_eq!(updated.kind, finance.kind);
        assert_eq!(updated.category, finance.category);
        assert_eq!(updated.created_at, finance.created_at);
    }

    #[tokio::test]
    async fn update_of_other_users_record_is_not_found() {
        let (server, state) = get_test_server();
        let (owner, _) = log_in_new_user(&server, "alice@example.com").await;
        let (_, intruder_cookie) = log_in_new_user(&server, "mallory@example.com").await;
        let finance = create_finance(
            Finance::build("Groceries", 80.0, FinanceType::Expense, Category::Food),
            owner.id,
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        server
            .put(&format_endpoint(endpoints::FINANCE, finance.id))
            .add_cookie(intruder_cookie)
            .json(&json!({ "title": "Mine now" }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn update_rejects_invalid_type() {
        let (server, state) = get_test_server();
        let (user, cookie) = log_in_new_user(&server, "alice@example.com").await;
        let finance = create_finance(
            Finance::build("Groceries", 80.0, FinanceType::Expense, Category::Food),
            user.id,
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        server
            .put(&format_endpoint(endpoints::FINANCE, finance.id))
            .add_cookie(cookie)
            .json(&json!({ "type": "transfer" }))
            .await
            .assert_status_bad_request();
    }
}
