//! The calculator's text buffer and the keys that edit it.

use std::str::FromStr;

use crate::calculator::expression::{evaluate, format_result};

/// What the buffer shows after a failed evaluation.
pub const ERROR_MARKER: &str = "Error";

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Append a digit, decimal point, operator or parenthesis.
    Append(char),
    /// Empty the buffer.
    Clear,
    /// Remove the last character.
    Backspace,
    /// Replace the buffer with the value of the expression it holds.
    Evaluate,
}

/// The key label was not one of the calculator's keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown calculator key \"{0}\"")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parse a key from its label on the keypad, e.g. "7", "+", "C", "Del" or "=".
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "C" => Ok(Key::Clear),
            "Del" => Ok(Key::Backspace),
            "=" => Ok(Key::Evaluate),
            _ => {
                let mut chars = label.chars();

                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || "+-*/.()".contains(c) => {
                        Ok(Key::Append(c))
                    }
                    _ => Err(UnknownKey(label.to_owned())),
                }
            }
        }
    }
}

/// Apply `key` to `buffer` and return the new buffer.
///
/// Appending to or deleting from a buffer that shows [ERROR_MARKER] starts
/// over with an empty buffer.
pub fn press(buffer: &str, key: Key) -> String {
    let buffer = if buffer == ERROR_MARKER { "" } else { buffer };

    match key {
        Key::Append(c) => format!("{buffer}{c}"),
        Key::Clear => String::new(),
        Key::Backspace => {
            let mut buffer = buffer.to_owned();
            buffer.pop();
            buffer
        }
        Key::Evaluate => match evaluate(buffer) {
            Ok(value) => format_result(value),
            Err(error) => {
                tracing::debug!("Could not evaluate {buffer:?}: {error}");
                ERROR_MARKER.to_owned()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{ERROR_MARKER, Key, UnknownKey, press};

    fn press_all(keys: &[&str]) -> String {
        keys.iter().fold(String::new(), |buffer, label| {
            press(&buffer, label.parse().expect("invalid key label"))
        })
    }

    #[test]
    fn parses_keypad_labels() {
        assert_eq!("7".parse::<Key>(), Ok(Key::Append('7')));
        assert_eq!("/".parse::<Key>(), Ok(Key::Append('/')));
        assert_eq!("(".parse::<Key>(), Ok(Key::Append('(')));
        assert_eq!("C".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("Del".parse::<Key>(), Ok(Key::Backspace));
        assert_eq!("=".parse::<Key>(), Ok(Key::Evaluate));
        assert_eq!("x".parse::<Key>(), Err(UnknownKey("x".to_owned())));
        assert_eq!("12".parse::<Key>(), Err(UnknownKey("12".to_owned())));
    }

    #[test]
    fn appends_and_evaluates() {
        assert_eq!(press_all(&["1", "2", "+", "3"]), "12+3");
        assert_eq!(press_all(&["1", "2", "+", "3", "="]), "15");
        assert_eq!(press_all(&["7", "/", "2", "="]), "3.5");
    }

    #[test]
    fn backspace_and_clear() {
        assert_eq!(press_all(&["1", "2", "Del"]), "1");
        assert_eq!(press_all(&["Del"]), "");
        assert_eq!(press_all(&["1", "2", "C"]), "");
    }

    #[test]
    fn errors_replace_the_buffer() {
        assert_eq!(press_all(&["1", "/", "0", "="]), ERROR_MARKER);
        assert_eq!(press_all(&["2", "+", "="]), ERROR_MARKER);
        assert_eq!(press_all(&["="]), ERROR_MARKER);
    }

    #[test]
    fn typing_after_an_error_starts_over() {
        assert_eq!(press(ERROR_MARKER, Key::Append('4')), "4");
        assert_eq!(press(ERROR_MARKER, Key::Backspace), "");
    }

    #[test]
    fn result_can_be_used_in_the_next_expression() {
        assert_eq!(press_all(&["2", "*", "3", "=", "+", "1", "="]), "7");
    }
}
