//! Expression evaluation error types

use std::fmt;

/// Failure while lexing, parsing, or evaluating an embedded expression.
///
/// Evaluation errors never abort a run; the caller splices them into the
/// output text as a visible placeholder instead.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A character outside the expression grammar
    UnexpectedChar(char),

    /// A numeric literal that does not parse
    InvalidNumber(String),

    /// Input ended where a value or operator was required
    UnexpectedEnd,

    /// A token out of place, including trailing input after a complete
    /// expression
    MalformedExpression,

    /// Right-hand side of `/` is zero
    DivisionByZero,

    /// The result overflowed or is otherwise not a finite number
    NotFinite,

    /// An `eval{` marker with no closing brace
    UnterminatedMarker,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnexpectedChar(ch) => {
                write!(f, "unexpected character '{}'", ch)
            }
            EvalError::InvalidNumber(text) => {
                write!(f, "invalid number '{}'", text)
            }
            EvalError::UnexpectedEnd => {
                write!(f, "unexpected end of expression")
            }
            EvalError::MalformedExpression => {
                write!(f, "malformed expression")
            }
            EvalError::DivisionByZero => {
                write!(f, "division by zero")
            }
            EvalError::NotFinite => {
                write!(f, "result is not a finite number")
            }
            EvalError::UnterminatedMarker => {
                write!(f, "unterminated eval marker")
            }
        }
    }
}

impl std::error::Error for EvalError {}
