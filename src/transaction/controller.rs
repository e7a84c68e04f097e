//! The state behind the transaction form: what the user has typed and which
//! transaction, if any, the form is currently editing.

use rusqlite::Connection;
use time::Date;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{
        Transaction, TransactionForm,
        core::{create_transaction, update_transaction},
        validate_transaction_form,
    },
};

/// What submitting the form will do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditTarget {
    /// Submitting creates a new transaction.
    #[default]
    Idle,
    /// Submitting updates the transaction with this ID.
    Editing(TransactionId),
}

/// The feedback shown below the form after the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// The last submission was saved.
    Success(String),
    /// The last submission was rejected, the input has been kept for correction.
    Error(String),
}

/// The result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new transaction was created.
    Created(Transaction),
    /// The transaction with this ID was updated.
    Updated(TransactionId),
}

/// Holds the transaction form's field values and its edit target.
///
/// There is a single form for the whole application. Selecting a row in the
/// transaction list loads that row into this form with [FormController::begin_edit].
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    fields: TransactionForm,
    edit_target: EditTarget,
    message: Option<FormMessage>,
}

impl FormController {
    /// Create an empty form in the idle state with the date set to `today`.
    pub fn new(today: Date) -> Self {
        Self {
            fields: blank_fields(today),
            edit_target: EditTarget::Idle,
            message: None,
        }
    }

    /// The current field values.
    pub fn fields(&self) -> &TransactionForm {
        &self.fields
    }

    /// Whether submitting will create or update a transaction.
    pub fn edit_target(&self) -> EditTarget {
        self.edit_target
    }

    /// The feedback from the last action, if any.
    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// Drop the feedback once it has been shown.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Load `transaction` into the form and target it for the next submission.
    ///
    /// Any unsaved changes to a previously selected transaction are discarded.
    pub fn begin_edit(&mut self, transaction: &Transaction) {
        self.fields = TransactionForm {
            description: transaction.description.clone(),
            amount: transaction.amount.to_string(),
            date: transaction.date.to_string(),
        };
        self.edit_target = EditTarget::Editing(transaction.id);
        self.message = None;
    }

    /// Leave edit mode without saving and clear the form.
    pub fn cancel_edit(&mut self, today: Date) {
        self.reset(today);
        self.message = None;
    }

    /// Cancel the edit if the transaction being edited has been deleted.
    pub fn forget_transaction(&mut self, id: TransactionId, today: Date) {
        if self.edit_target == EditTarget::Editing(id) {
            self.cancel_edit(today);
        }
    }

    /// Validate `input` and create or update a transaction depending on the edit target.
    ///
    /// On success the form is cleared (with the date reset to `today`) and
    /// returns to the idle state. On failure the input is kept so the user can
    /// correct it, the edit target is unchanged and nothing is written to the
    /// database.
    ///
    /// # Errors
    /// Returns a validation error ([Error::MissingField], [Error::InvalidDate],
    /// [Error::InvalidAmount]) or an [Error::SqlError] if the database could
    /// not be written.
    pub fn submit(
        &mut self,
        input: TransactionForm,
        today: Date,
        connection: &Connection,
    ) -> Result<SubmitOutcome, Error> {
        self.fields = input;

        let new_transaction = validate_transaction_form(&self.fields).inspect_err(|error| {
            self.message = error
                .form_message()
                .map(|message| FormMessage::Error(message.to_owned()));
        })?;

        let outcome = match self.edit_target {
            EditTarget::Idle => {
                let transaction = create_transaction(&new_transaction, connection)?;
                tracing::info!("Created transaction {}", transaction.id);
                self.message = Some(FormMessage::Success(
                    "Transaction added successfully".to_owned(),
                ));

                SubmitOutcome::Created(transaction)
            }
            EditTarget::Editing(id) => {
                let rows_affected = update_transaction(id, &new_transaction, connection)?;
                if rows_affected == 0 {
                    tracing::warn!("Transaction {id} no longer exists, nothing was updated");
                } else {
                    tracing::info!("Updated transaction {id}");
                }
                self.message = Some(FormMessage::Success(
                    "Transaction updated successfully".to_owned(),
                ));

                SubmitOutcome::Updated(id)
            }
        };

        self.reset(today);

        Ok(outcome)
    }

    fn reset(&mut self, today: Date) {
        self.fields = blank_fields(today);
        self.edit_target = EditTarget::Idle;
    }
}

fn blank_fields(today: Date) -> TransactionForm {
    TransactionForm {
        description: String::new(),
        amount: String::new(),
        date: today.to_string(),
    }
}
