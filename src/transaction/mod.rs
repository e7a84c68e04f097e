//! Transactions: the ledger records and everything needed to enter and manage them.
//!
//! This module contains:
//! - The `Transaction` model and the database functions of the ledger
//! - Validation of raw form input
//! - The `FormController` state machine that decides between creating and updating
//! - The route handlers for the main form, the transaction list and deletion

mod controller;
mod core;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod home_page;
mod submit_endpoint;
mod transactions_page;
mod validation;

pub use controller::{EditTarget, FormController, FormMessage, SubmitOutcome};
pub use core::{
    NewTransaction, Transaction, create_transaction, create_transaction_table,
    delete_transaction, get_all_transactions, get_transaction, update_transaction,
};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{cancel_edit_endpoint, edit_transaction_endpoint};
pub use home_page::get_home_page;
pub use submit_endpoint::submit_transaction_endpoint;
pub use transactions_page::get_transactions_page;
pub use validation::{TransactionForm, validate_transaction_form};

#[cfg(test)]
pub use core::count_transactions;
