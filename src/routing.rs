//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    calculator::{get_calculator_page, press_calculator_key},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    summary::{get_daily_summary_page, get_monthly_summary_page},
    transaction::{
        cancel_edit_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_home_page, get_transactions_page, submit_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::DAILY_SUMMARY_VIEW, get(get_daily_summary_page))
        .route(
            endpoints::MONTHLY_SUMMARY_VIEW,
            get(get_monthly_summary_page),
        )
        .route(endpoints::CALCULATOR_VIEW, get(get_calculator_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::SUBMIT_TRANSACTION,
            post(submit_transaction_endpoint),
        )
        .route(endpoints::EDIT_TRANSACTION, post(edit_transaction_endpoint))
        .route(endpoints::CANCEL_EDIT, post(cancel_edit_endpoint))
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .route(endpoints::CALCULATOR_API, post(press_calculator_key));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, endpoints, routing::build_router};

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn pages_are_served() {
        let server = get_test_server();

        for endpoint in [
            endpoints::ROOT,
            endpoints::TRANSACTIONS_VIEW,
            endpoints::DAILY_SUMMARY_VIEW,
            endpoints::MONTHLY_SUMMARY_VIEW,
            endpoints::CALCULATOR_VIEW,
        ] {
            server.get(endpoint).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn internal_error_page_has_500_status() {
        let server = get_test_server();

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn submitted_transaction_appears_in_list_and_summary() {
        let server = get_test_server();

        server
            .post(endpoints::SUBMIT_TRANSACTION)
            .form(&[
                ("description", "Salary"),
                ("amount", "2000"),
                ("date", "2024-03-01"),
            ])
            .await
            .assert_status_ok();

        let transactions = server.get(endpoints::TRANSACTIONS_VIEW).await;
        transactions.assert_status_ok();
        assert!(transactions.text().contains("Salary"));

        let summary = server.get(endpoints::MONTHLY_SUMMARY_VIEW).await;
        summary.assert_status_ok();
        assert!(summary.text().contains("2024-03"));
    }

    #[tokio::test]
    async fn calculator_key_press_is_routed() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CALCULATOR_API)
            .form(&[("buffer", "2+2"), ("key", "=")])
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("value=\"4\""));
    }
}
