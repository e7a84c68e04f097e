//! The calculator page and the endpoint for pressing its keys.
//!
//! The buffer is carried in the form itself, so the server keeps no calculator state.

use axum::response::{IntoResponse, Response};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    calculator::buffer::{Key, press},
    endpoints,
    html::{FORM_CONTAINER_STYLE, FORM_TEXT_INPUT_STYLE, base},
    navigation::NavBar,
};

/// The keypad, row by row.
const KEYPAD: [[&str; 4]; 5] = [
    ["(", ")", "Del", "C"],
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    [".", "0", "=", "+"],
];

const KEY_STYLE: &str = "py-4 text-lg font-semibold rounded border border-gray-200 \
    bg-white text-gray-900 hover:bg-gray-100 dark:bg-gray-800 dark:text-white \
    dark:border-gray-600 dark:hover:bg-gray-700";
const EQUALS_KEY_STYLE: &str = "py-4 text-lg font-semibold rounded bg-green-500 \
    text-white hover:bg-green-600";
const CLEAR_KEY_STYLE: &str = "py-4 text-lg font-semibold rounded bg-red-500 \
    text-white hover:bg-red-600";
const DELETE_KEY_STYLE: &str = "py-4 text-lg font-semibold rounded bg-orange-400 \
    text-white hover:bg-orange-500";

/// The form data sent when a key is pressed.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorForm {
    /// The text in the display before the key was pressed.
    #[serde(default)]
    pub buffer: String,
    /// The label of the key that was pressed.
    #[serde(default)]
    pub key: String,
}

/// Render the calculator with an empty display.
pub async fn get_calculator_page() -> Response {
    calculator_view().into_response()
}

/// A route handler for a key press, responds with the calculator showing the new buffer.
///
/// Unknown keys leave the buffer unchanged.
pub async fn press_calculator_key(Form(form): Form<CalculatorForm>) -> Response {
    let buffer = match form.key.parse::<Key>() {
        Ok(key) => press(&form.buffer, key),
        Err(error) => {
            tracing::warn!("{error}");
            form.buffer
        }
    };

    calculator_partial(&buffer).into_response()
}

fn calculator_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::CALCULATOR_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Calculator" }

            (calculator_partial(""))
        }
    );

    base("Calculator", &[], &content)
}

fn calculator_partial(buffer: &str) -> Markup {
    let key_style = |label: &str| match label {
        "=" => EQUALS_KEY_STYLE,
        "C" => CLEAR_KEY_STYLE,
        "Del" => DELETE_KEY_STYLE,
        _ => KEY_STYLE,
    };

    html!(
        form
            id="calculator"
            hx-post=(endpoints::CALCULATOR_API)
            hx-target="this"
            hx-swap="outerHTML"
            class="w-full space-y-4"
        {
            input
                name="buffer"
                id="calculator-display"
                type="text"
                value=(buffer)
                autocomplete="off"
                class={ (FORM_TEXT_INPUT_STYLE) " text-right text-2xl" };

            div class="grid grid-cols-4 gap-2"
            {
                @for row in KEYPAD {
                    @for label in row {
                        button
                            type="submit"
                            name="key"
                            value=(label)
                            class=(key_style(label))
                        {
                            (label)
                        }
                    }
                }
            }
        }
    )
}
