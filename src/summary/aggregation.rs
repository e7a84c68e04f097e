//! Totals of transaction amounts grouped by day or by month.

use rusqlite::{Connection, Row};

use crate::Error;

/// The sum of the amounts of every transaction that falls in one period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTotal {
    /// The group key, a date ("2024-03-01") or a month ("2024-03").
    pub period: String,
    /// The summed amount, negative when expenses outweigh income.
    pub total: f64,
}

/// Sum the transactions on each date, oldest first.
///
/// Dates without transactions are omitted.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn aggregate_by_day(connection: &Connection) -> Result<Vec<PeriodTotal>, Error> {
    connection
        .prepare(
            "SELECT date, SUM(amount) FROM transactions
             GROUP BY date
             ORDER BY date ASC",
        )?
        .query_map([], map_period_total_row)?
        .map(|maybe_total| maybe_total.map_err(Error::from))
        .collect()
}

/// Sum the transactions in each calendar month, oldest first.
///
/// Months are keyed by the first seven characters of the stored date, e.g. "2024-03".
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn aggregate_by_month(connection: &Connection) -> Result<Vec<PeriodTotal>, Error> {
    connection
        .prepare(
            "SELECT substr(date, 1, 7) AS month, SUM(amount) FROM transactions
             GROUP BY month
             ORDER BY month ASC",
        )?
        .query_map([], map_period_total_row)?
        .map(|maybe_total| maybe_total.map_err(Error::from))
        .collect()
}

fn map_period_total_row(row: &Row) -> Result<PeriodTotal, rusqlite::Error> {
    Ok(PeriodTotal {
        period: row.get(0)?,
        total: row.get(1)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        transaction::{
            NewTransaction, TransactionForm, create_transaction, delete_transaction,
            get_all_transactions, update_transaction, validate_transaction_form,
        },
    };

    use super::{PeriodTotal, aggregate_by_day, aggregate_by_month};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_transaction(description: &str, amount: f64, date: time::Date) -> NewTransaction {
        NewTransaction {
            description: description.to_owned(),
            amount,
            date,
        }
    }

    fn total(period: &str, total: f64) -> PeriodTotal {
        PeriodTotal {
            period: period.to_owned(),
            total,
        }
    }

    /// Salary and coffee in March, rent in April.
    fn create_example_ledger(conn: &Connection) {
        for transaction in [
            new_transaction("Salary", 2000.0, date!(2024 - 03 - 01)),
            new_transaction("Coffee", -4.5, date!(2024 - 03 - 01)),
            new_transaction("Rent", -1200.0, date!(2024 - 04 - 01)),
        ] {
            create_transaction(&transaction, conn).unwrap();
        }
    }

    #[test]
    fn empty_ledger_has_no_totals() {
        let conn = get_test_connection();

        assert!(aggregate_by_day(&conn).unwrap().is_empty());
        assert!(aggregate_by_month(&conn).unwrap().is_empty());
    }

    #[test]
    fn sums_by_day_and_month() {
        let conn = get_test_connection();
        create_example_ledger(&conn);

        assert_eq!(
            aggregate_by_day(&conn).unwrap(),
            vec![total("2024-03-01", 1995.5), total("2024-04-01", -1200.0)]
        );
        assert_eq!(
            aggregate_by_month(&conn).unwrap(),
            vec![total("2024-03", 1995.5), total("2024-04", -1200.0)]
        );
    }

    #[test]
    fn totals_follow_an_update() {
        let conn = get_test_connection();
        create_example_ledger(&conn);
        let coffee = get_all_transactions(&conn)
            .unwrap()
            .into_iter()
            .find(|transaction| transaction.description == "Coffee")
            .unwrap();

        update_transaction(
            coffee.id,
            &new_transaction("Coffee", -5.0, date!(2024 - 03 - 01)),
            &conn,
        )
        .unwrap();

        assert_eq!(
            aggregate_by_day(&conn).unwrap()[0],
            total("2024-03-01", 1995.0)
        );
    }

    #[test]
    fn month_disappears_when_its_only_transaction_is_deleted() {
        let conn = get_test_connection();
        create_example_ledger(&conn);
        let rent = get_all_transactions(&conn)
            .unwrap()
            .into_iter()
            .find(|transaction| transaction.description == "Rent")
            .unwrap();

        delete_transaction(rent.id, &conn).unwrap();

        assert_eq!(
            aggregate_by_month(&conn).unwrap(),
            vec![total("2024-03", 1995.5)]
        );
    }

    #[test]
    fn signed_years_never_reach_the_month_totals() {
        let conn = get_test_connection();
        for date in ["-2024-03-01", "+2024-05-09", "0000-01-01"] {
            let form = TransactionForm {
                description: "x".to_owned(),
                amount: "1".to_owned(),
                date: date.to_owned(),
            };

            if let Ok(transaction) = validate_transaction_form(&form) {
                create_transaction(&transaction, &conn).unwrap();
            }
        }
        create_example_ledger(&conn);

        assert_eq!(
            aggregate_by_month(&conn).unwrap(),
            vec![total("2024-03", 1995.5), total("2024-04", -1200.0)]
        );
    }

    #[test]
    fn groups_are_sorted_and_sum_to_the_ledger_total() {
        let conn = get_test_connection();
        let amounts = [
            (12.25, date!(2024 - 12 - 31)),
            (-3.0, date!(2023 - 01 - 15)),
            (100.0, date!(2024 - 02 - 29)),
            (-0.25, date!(2024 - 02 - 01)),
            (7.0, date!(2023 - 01 - 15)),
        ];
        for (amount, date) in amounts {
            create_transaction(&new_transaction("x", amount, date), &conn).unwrap();
        }
        let ledger_total: f64 = amounts.iter().map(|(amount, _)| amount).sum();

        let by_day = aggregate_by_day(&conn).unwrap();
        let by_month = aggregate_by_month(&conn).unwrap();

        for totals in [&by_day, &by_month] {
            assert!(
                totals.windows(2).all(|pair| pair[0].period < pair[1].period),
                "totals not sorted: {totals:?}"
            );
            let sum: f64 = totals.iter().map(|total| total.total).sum();
            assert!((sum - ledger_total).abs() < 1e-9);
        }
        assert_eq!(by_day.len(), 4);
        assert_eq!(
            by_month
                .iter()
                .map(|total| total.period.as_str())
                .collect::<Vec<_>>(),
            vec!["2023-01", "2024-02", "2024-12"]
        );
    }
}
