//! The page listing every transaction with actions to edit or delete each one.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, amount_class, base, format_amount,
    },
    navigation::NavBar,
    transaction::{Transaction, core::get_all_transactions},
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 40;

/// The element ID of the table, used as the target when a row is deleted.
pub(crate) const TRANSACTIONS_TABLE_ID: &str = "transactions-table";

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the list of all transactions.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve transactions: {error}"))?;

    Ok(transactions_view(&transactions).into_response())
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    a href=(endpoints::ROOT) class=(LINK_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                (transactions_table(transactions))
            }
        }
    );

    base("Transactions", &[], &content)
}

/// Render the table of `transactions`, one row per transaction.
///
/// Delete requests swap the whole table for a freshly read copy.
pub(crate) fn transactions_table(transactions: &[Transaction]) -> Markup {
    let table_row = |transaction: &Transaction| {
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_TRANSACTION, transaction.id);
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);
        let (description, full_description) = format_description(&transaction.description);

        html!(
            tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
            {
                td class=(TABLE_CELL_STYLE) { (transaction.id) }

                td class=(TABLE_CELL_STYLE) { (transaction.date) }

                td class=(TABLE_CELL_STYLE) title=[full_description] { (description) }

                td class={ (TABLE_CELL_STYLE) " text-right tabular-nums " (amount_class(transaction.amount)) }
                {
                    (format_amount(transaction.amount))
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        button
                            hx-post=(edit_url)
                            hx-target-error="#alert-container"
                            class=(BUTTON_EDIT_STYLE)
                        {
                            "Edit"
                        }

                        button
                            hx-delete=(delete_url)
                            hx-confirm={
                                "Are you sure you want to delete '"
                                (transaction.description) "'?"
                            }
                            hx-target={ "#" (TRANSACTIONS_TABLE_ID) }
                            hx-target-error="#alert-container"
                            hx-swap="outerHTML"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        )
    };

    html!(
        section
            id=(TRANSACTIONS_TABLE_ID)
            class="dark:bg-gray-800 w-full overflow-x-auto"
        {
            table class="w-full text-sm text-left rtl:text-right
                text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (table_row(transaction))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="5"
                                class="px-6 py-4 text-center
                                    text-gray-500 dark:text-gray-400"
                            {
                                "No transactions recorded yet. "
                                a href=(endpoints::ROOT) class=(LINK_STYLE)
                                {
                                    "Add your first transaction"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Truncate long descriptions, returning the full text as well when it was shortened.
fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        (truncated + "...", Some(description))
    }
}
