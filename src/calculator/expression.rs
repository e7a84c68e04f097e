//! Arithmetic expression evaluation for the calculator.
//!
//! Supports decimal numbers, the binary operators `+ - * /` with the usual
//! precedence and left associativity, unary minus (and plus), and parentheses.

/// The reasons an expression cannot be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    /// There is nothing to evaluate.
    #[error("the expression is empty")]
    Empty,

    /// A character that is not part of an arithmetic expression.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A number with more than one decimal point or no digits, e.g. "1.2.3" or ".".
    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),

    /// A token appeared where it is not allowed, e.g. the second `*` in "2**3".
    #[error("unexpected {0}")]
    UnexpectedToken(String),

    /// The expression stopped before it was complete, e.g. "2+" or "(1".
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// The right hand side of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result overflowed to infinity.
    #[error("the result is not a finite number")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl Token {
    fn describe(self) -> String {
        match self {
            Token::Number(number) => format!("number {number}"),
            Token::Plus => "'+'".to_owned(),
            Token::Minus => "'-'".to_owned(),
            Token::Star => "'*'".to_owned(),
            Token::Slash => "'/'".to_owned(),
            Token::LeftParen => "'('".to_owned(),
            Token::RightParen => "')'".to_owned(),
        }
    }
}

/// Evaluate `expression` and return its value.
///
/// # Errors
/// Returns an [ExpressionError] if the expression is malformed, divides by
/// zero or does not produce a finite number.
pub fn evaluate(expression: &str) -> Result<f64, ExpressionError> {
    let tokens = tokenize(expression)?;

    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        position: 0,
    };
    let value = parser.expression()?;

    if let Some(token) = parser.peek() {
        return Err(ExpressionError::UnexpectedToken(token.describe()));
    }

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::NotFinite)
    }
}

/// Format a result for display, whole numbers are shown without a decimal point.
pub fn format_result(value: f64) -> String {
    // Whole numbers this large lose precision anyway.
    const MAX_WHOLE: f64 = 1e15;

    if value == 0.0 {
        "0".to_owned()
    } else if value.fract() == 0.0 && value.abs() < MAX_WHOLE {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = expression.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();

                while let Some(&(index, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        end = index + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                let text = &expression[start..end];
                let number = text
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::InvalidNumber(text.to_owned()))?;

                Token::Number(number)
            }
            c => return Err(ExpressionError::UnexpectedCharacter(c)),
        };

        tokens.push(token);
    }

    Ok(tokens)
}

/// A recursive descent parser that evaluates as it parses.
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := factor (("*" | "/") factor)*
/// factor     := ("-" | "+") factor | primary
/// primary    := number | "(" expression ")"
/// ```
struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        self.position += 1;
        token
    }

    fn expression(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term()?;

        while let Some(token @ (Token::Plus | Token::Minus)) = self.peek() {
            self.next();
            let rhs = self.term()?;

            if token == Token::Plus {
                value += rhs;
            } else {
                value -= rhs;
            }
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.factor()?;

        while let Some(token @ (Token::Star | Token::Slash)) = self.peek() {
            self.next();
            let rhs = self.factor()?;

            if token == Token::Star {
                value *= rhs;
            } else if rhs == 0.0 {
                return Err(ExpressionError::DivisionByZero);
            } else {
                value /= rhs;
            }
        }

        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, ExpressionError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.next();
                Ok(-self.factor()?)
            }
            Some(Token::Plus) => {
                self.next();
                self.factor()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, ExpressionError> {
        match self.next() {
            Some(Token::Number(number)) => Ok(number),
            Some(Token::LeftParen) => {
                let value = self.expression()?;

                match self.next() {
                    Some(Token::RightParen) => Ok(value),
                    Some(token) => Err(ExpressionError::UnexpectedToken(token.describe())),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some(token) => Err(ExpressionError::UnexpectedToken(token.describe())),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpressionError, evaluate, format_result};

    #[test]
    fn evaluates_with_precedence() {
        let cases = [
            ("1+2", 3.0),
            ("2+3*4", 14.0),
            ("(2+3)*4", 20.0),
            ("10-4-3", 3.0),
            ("100/10/5", 2.0),
            ("7/2", 3.5),
            ("-3+5", 2.0),
            ("2*-3", -6.0),
            ("--4", 4.0),
            ("-(1+2)*3", -9.0),
            (" 1.5 * 4 ", 6.0),
            (".5+.25", 0.75),
            ("3.", 3.0),
        ];

        for (expression, want) in cases {
            assert_eq!(evaluate(expression), Ok(want), "expression {expression:?}");
        }
    }

    #[test]
    fn rejects_malformed_expressions() {
        let cases = [
            ("", ExpressionError::Empty),
            ("   ", ExpressionError::Empty),
            ("2+", ExpressionError::UnexpectedEnd),
            ("(1+2", ExpressionError::UnexpectedEnd),
            ("1+2)", ExpressionError::UnexpectedToken("')'".to_owned())),
            ("2**3", ExpressionError::UnexpectedToken("'*'".to_owned())),
            ("1.2.3", ExpressionError::InvalidNumber("1.2.3".to_owned())),
            ("2^3", ExpressionError::UnexpectedCharacter('^')),
            ("()", ExpressionError::UnexpectedToken("')'".to_owned())),
            ("2 3", ExpressionError::UnexpectedToken("number 3".to_owned())),
        ];

        for (expression, want) in cases {
            assert_eq!(evaluate(expression), Err(want), "expression {expression:?}");
        }
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(evaluate("1/0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(evaluate("5/(2-2)"), Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn overflow_is_an_error() {
        let huge = format!("1{}", "0".repeat(308));

        assert_eq!(
            evaluate(&format!("{huge}*{huge}")),
            Err(ExpressionError::NotFinite)
        );
    }

    #[test]
    fn whole_numbers_are_formatted_without_decimals() {
        assert_eq!(format_result(4.0), "4");
        assert_eq!(format_result(-12.0), "-12");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(3.5), "3.5");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
    }
}
