//! Defines the endpoints for selecting a transaction to edit and for leaving edit mode.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    Error,
    database_id::TransactionId,
    endpoints,
    timezone::today_in,
    transaction::{
        core::get_transaction, form::transaction_form_view, submit_endpoint::TransactionFormState,
    },
};

/// A route handler that loads a transaction into the form, then redirects
/// the client to the form.
///
/// Responds with a 404 alert if the transaction no longer exists.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut controller = match state.transaction_form.lock() {
        Ok(controller) => controller,
        Err(error) => {
            tracing::error!("could not acquire form lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    let transaction = {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return Error::DatabaseLockError.into_alert_response();
            }
        };

        match get_transaction(transaction_id, &connection) {
            Ok(transaction) => transaction,
            Err(error) => {
                tracing::error!("could not load transaction {transaction_id} for editing: {error}");
                return error.into_alert_response();
            }
        }
    };

    controller.begin_edit(&transaction);
    tracing::info!("Editing transaction {transaction_id}");

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// A route handler that discards the selected transaction and responds with a cleared form.
pub async fn cancel_edit_endpoint(State(state): State<TransactionFormState>) -> Response {
    let today = match today_in(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let mut controller = match state.transaction_form.lock() {
        Ok(controller) => controller,
        Err(error) => {
            tracing::error!("could not acquire form lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    controller.cancel_edit(today);

    transaction_form_view(&controller).into_response()
}
