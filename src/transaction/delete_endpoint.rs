//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    timezone::today_in,
    transaction::{
        core::{delete_transaction, get_all_transactions},
        submit_endpoint::TransactionFormState,
        transactions_page::transactions_table,
    },
};

/// A route handler for deleting a transaction, responds with the re-read transactions table.
///
/// Deleting a transaction that does not exist is not an error. If the deleted
/// transaction was loaded into the form for editing, the edit is cancelled.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
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

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_transaction(transaction_id, &connection) {
        Ok(0) => tracing::warn!("Transaction {transaction_id} was already deleted"),
        Ok(_) => tracing::info!("Deleted transaction {transaction_id}"),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    }

    controller.forget_transaction(transaction_id, today);

    match get_all_transactions(&connection) {
        Ok(transactions) => transactions_table(&transactions).into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve transactions: {error}");
            error.into_alert_response()
        }
    }
}
