//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use time::Date;

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created with [create_transaction] from a [NewTransaction].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// The sign convention is up to the user, e.g. negative for expenses and
    /// positive for income.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
}

/// The user editable fields of a transaction that have passed validation.
///
/// See [crate::transaction::validate_transaction_form] for how these are
/// produced from form input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A non-empty description.
    pub description: String,
    /// A finite amount.
    pub amount: f64,
    /// A real calendar date.
    pub date: Date,
}

/// The number of rows changed by an `UPDATE` or `DELETE` statement.
pub type RowsAffected = usize;

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: &NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (description, amount, date)
             VALUES (?1, ?2, ?3)
             RETURNING id, description, amount, date",
        )?
        .query_row(
            (
                &new_transaction.description,
                new_transaction.amount,
                new_transaction.date,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare("SELECT id, description, amount, date FROM transactions WHERE id = :id")?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction, oldest date first.
///
/// Transactions on the same date are returned in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, description, amount, date FROM transactions ORDER BY date ASC, id ASC")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Replace the description, amount and date of the transaction `id`.
///
/// Updating a transaction that does not exist is not an error, the returned
/// row count is simply zero.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn update_transaction(
    id: TransactionId,
    fields: &NewTransaction,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE transactions SET description = ?1, amount = ?2, date = ?3 WHERE id = ?4",
            (&fields.description, fields.amount, fields.date, id),
        )
        .map_err(Error::from)
}

/// Delete the transaction `id`.
///
/// Deleting a transaction that does not exist is not an error, the returned
/// row count is simply zero.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// `AUTOINCREMENT` guarantees that the IDs of deleted transactions are never
/// handed out again.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);",
    )?;

    Ok(())
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = row.get(2)?;
    let date = row.get(3)?;

    Ok(Transaction {
        id,
        description,
        amount,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
