//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}', use [format_endpoint].

/// The main window: the transaction form and the actions menu.
pub const ROOT: &str = "/";
/// The page listing every transaction.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The bar chart of totals per day.
pub const DAILY_SUMMARY_VIEW: &str = "/summary/daily";
/// The bar chart of totals per month.
pub const MONTHLY_SUMMARY_VIEW: &str = "/summary/monthly";
/// The calculator page.
pub const CALCULATOR_VIEW: &str = "/calculator";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for submitting the transaction form, creating or updating a transaction.
pub const SUBMIT_TRANSACTION: &str = "/api/transactions/submit";
/// The route for loading a transaction into the form for editing.
pub const EDIT_TRANSACTION: &str = "/api/transactions/{transaction_id}/edit";
/// The route for leaving edit mode without saving.
pub const CANCEL_EDIT: &str = "/api/transactions/cancel_edit";
/// The route to delete a single transaction.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route for pressing a key on the calculator.
pub const CALCULATOR_API: &str = "/api/calculator";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DAILY_SUMMARY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::MONTHLY_SUMMARY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CALCULATOR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::SUBMIT_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::EDIT_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::CANCEL_EDIT);
        assert_endpoint_is_valid_uri(endpoints::DELETE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::CALCULATOR_API);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::DELETE_TRANSACTION, 1);

        assert_eq!(formatted_path, "/api/transactions/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint(endpoints::TRANSACTIONS_VIEW, 1);

        assert_eq!(formatted_path, "/transactions");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::EDIT_TRANSACTION, 42);

        assert_eq!(formatted_path, "/api/transactions/42/edit");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
