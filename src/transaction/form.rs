//! The markup for the transaction form.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        loading_spinner,
    },
    transaction::controller::{EditTarget, FormController, FormMessage},
};

/// The element ID of the form, used as the target for HTMX swaps.
pub(crate) const TRANSACTION_FORM_ID: &str = "transaction-form";

/// Render the transaction form with the controller's current field values.
///
/// Submitting the form swaps this fragment for the re-rendered form, so the
/// success or validation message appears in place.
pub(crate) fn transaction_form_view(controller: &FormController) -> Markup {
    let fields = controller.fields();
    let spinner = loading_spinner();
    let (heading, submit_label) = match controller.edit_target() {
        EditTarget::Idle => ("New Transaction".to_owned(), "Add Transaction"),
        EditTarget::Editing(id) => (format!("Edit Transaction #{id}"), "Update Transaction"),
    };

    html! {
        form
            id=(TRANSACTION_FORM_ID)
            hx-post=(endpoints::SUBMIT_TRANSACTION)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { (heading) }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    value=(fields.description)
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    value=(fields.amount)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date (YYYY-MM-DD)"
                }

                input
                    name="date"
                    id="date"
                    type="text"
                    placeholder="YYYY-MM-DD"
                    value=(fields.date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @match controller.message() {
                Some(FormMessage::Success(message)) => {
                    p id="form-message" class="text-green-700 dark:text-green-400" { (message) }
                }
                Some(FormMessage::Error(message)) => {
                    p id="form-message" class="text-red-700 dark:text-red-400" { (message) }
                }
                None => {}
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " " (submit_label)
            }

            @if let EditTarget::Editing(_) = controller.edit_target() {
                button
                    type="button"
                    id="cancel-edit-button"
                    hx-post=(endpoints::CANCEL_EDIT)
                    hx-target={ "#" (TRANSACTION_FORM_ID) }
                    hx-swap="outerHTML"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Cancel Edit"
                }
            }
        }
    }
}
