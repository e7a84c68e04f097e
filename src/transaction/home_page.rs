//! The main page: the transaction form and buttons for the other windows.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::{controller::FormController, form::transaction_form_view},
};

/// The state needed for the main page.
#[derive(Debug, Clone)]
pub struct HomePageState {
    /// The form's field values and edit target.
    pub transaction_form: Arc<Mutex<FormController>>,
}

impl FromRef<AppState> for HomePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_form: state.transaction_form.clone(),
        }
    }
}

/// Render the main page with the form in its current state.
///
/// Any pending form message is shown once and then cleared.
pub async fn get_home_page(State(state): State<HomePageState>) -> Result<Response, Error> {
    let mut controller = state
        .transaction_form
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire form lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let view = home_view(&controller);
    controller.clear_message();

    Ok(view.into_response())
}

fn home_view(controller: &FormController) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();
    let actions = [
        ("Show Daily Summary", endpoints::DAILY_SUMMARY_VIEW),
        ("Show Monthly Summary", endpoints::MONTHLY_SUMMARY_VIEW),
        ("List Transactions", endpoints::TRANSACTIONS_VIEW),
        ("Open Calculator", endpoints::CALCULATOR_VIEW),
    ];

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            (transaction_form_view(controller))

            section id="actions" class="w-full mt-8"
            {
                button
                    type="button"
                    id="fullscreen-toggle"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Toggle Fullscreen"
                }

                @for (label, url) in actions {
                    a href=(url) class={ "block text-center " (BUTTON_SECONDARY_STYLE) }
                    {
                        (label)
                    }
                }
            }
        }
    };

    base("Home", &[], &content)
}
