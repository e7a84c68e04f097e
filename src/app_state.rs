//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, timezone::today_in, transaction::FormController};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The values and edit target of the transaction form.
    pub transaction_form: Arc<Mutex<FormController>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or if
    /// `local_timezone` is not a known timezone.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;
        let today = today_in(local_timezone)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            db_connection: Arc::new(Mutex::new(db_connection)),
            transaction_form: Arc::new(Mutex::new(FormController::new(today))),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{Error, transaction::EditTarget};

    use super::AppState;

    #[test]
    fn new_state_starts_with_idle_form() {
        let state = AppState::new(Connection::open_in_memory().unwrap(), "Etc/UTC").unwrap();

        let form = state.transaction_form.lock().unwrap();
        assert_eq!(form.edit_target(), EditTarget::Idle);
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new(Connection::open_in_memory().unwrap(), "Not/AZone");

        assert!(matches!(result, Err(Error::InvalidTimezoneError(_))));
    }
}
