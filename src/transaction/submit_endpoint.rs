//! Defines the endpoint for submitting the transaction form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    timezone::today_in,
    transaction::{
        TransactionForm,
        controller::{FormController, SubmitOutcome},
        form::transaction_form_view,
    },
};

/// The state needed to drive the transaction form.
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The form's field values and edit target.
    pub transaction_form: Arc<Mutex<FormController>>,
}

impl FromRef<AppState> for TransactionFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
            transaction_form: state.transaction_form.clone(),
        }
    }
}

/// A route handler for the transaction form.
///
/// Creates a transaction when the form is idle and updates the selected
/// transaction when editing. Responds with the re-rendered form, which holds
/// either the success message and cleared fields or the validation message
/// and the values as entered. The message is only shown in this response.
pub async fn submit_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Form(form): Form<TransactionForm>,
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

    match controller.submit(form, today, &connection) {
        Ok(SubmitOutcome::Created(transaction)) => {
            tracing::debug!("Form created {transaction:?}");
        }
        Ok(SubmitOutcome::Updated(id)) => {
            tracing::debug!("Form updated transaction {id}");
        }
        Err(error) if error.form_message().is_some() => {
            tracing::debug!("Rejected transaction form: {error}");
        }
        Err(error) => {
            tracing::error!("could not save transaction: {error}");
            return error.into_alert_response();
        }
    }

    let view = transaction_form_view(&controller);
    controller.clear_message();

    view.into_response()
}
