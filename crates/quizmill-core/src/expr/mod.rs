//! Restricted arithmetic expression evaluation
//!
//! Question text embeds `eval{...}` markers whose bodies are evaluated
//! after substitution. Bodies are parsed against a closed grammar of
//! numeric literals, `+ - * / ^`, unary minus and parentheses; nothing
//! else is reachable from template input. `^` is right-associative and
//! binds tighter than unary minus on its base, so `-2^2` is -4 while
//! `2^-2` is 0.25.

mod error;

pub use error::EvalError;

/// Opening text of an embedded expression marker.
const MARKER: &str = "eval{";

#[derive(Debug, Clone, PartialEq)]
enum ExprToken {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

fn lex(input: &str) -> Result<Vec<ExprToken>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        match ch {
            ' ' | '\t' | '\r' | '\n' => {
                chars.next();
            }
            '+' => {
                tokens.push(ExprToken::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(ExprToken::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(ExprToken::Star);
                chars.next();
            }
            '/' => {
                tokens.push(ExprToken::Slash);
                chars.next();
            }
            '^' => {
                tokens.push(ExprToken::Caret);
                chars.next();
            }
            '(' => {
                tokens.push(ExprToken::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(ExprToken::RParen);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(pos, digit)) = chars.peek() {
                    if digit.is_ascii_digit() || digit == '.' {
                        end = pos + digit.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[start..end];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(text.to_string()))?;
                tokens.push(ExprToken::Number(value));
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser evaluating as it goes.
///
/// Grammar, loosest binding first:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := '-' unary | power
/// power      := atom ('^' unary)?
/// atom       := number | '(' expression ')'
/// ```
struct Parser {
    tokens: Vec<ExprToken>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&ExprToken> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<ExprToken> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(ExprToken::Plus) => {
                    self.advance();
                    value += self.term()?;
                }
                Some(ExprToken::Minus) => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(ExprToken::Star) => {
                    self.advance();
                    value *= self.unary()?;
                }
                Some(ExprToken::Slash) => {
                    self.advance();
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        if matches!(self.peek(), Some(ExprToken::Minus)) {
            self.advance();
            return Ok(-self.unary()?);
        }
        self.power()
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(ExprToken::Caret)) {
            self.advance();
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<f64, EvalError> {
        match self.advance() {
            Some(ExprToken::Number(value)) => Ok(value),
            Some(ExprToken::LParen) => {
                let value = self.expression()?;
                match self.advance() {
                    Some(ExprToken::RParen) => Ok(value),
                    Some(_) => Err(EvalError::MalformedExpression),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some(_) => Err(EvalError::MalformedExpression),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate one expression body to a finite number.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = lex(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;
    if parser.pos != parser.tokens.len() {
        return Err(EvalError::MalformedExpression);
    }
    if !value.is_finite() {
        return Err(EvalError::NotFinite);
    }
    Ok(value)
}

/// Render an evaluation result the way question text expects it:
/// fraction-free values print without a decimal point (`6`, not `6.0`).
pub fn render_value(value: f64) -> String {
    value.to_string()
}

/// Resolve every `eval{...}` marker in `text`, innermost first.
///
/// The rightmost remaining opener can contain no nested marker, so it is
/// evaluated and spliced first; its numeric result then participates in
/// any enclosing expression. Failed bodies are replaced by a visible
/// `[eval error: ...]` placeholder instead of aborting the run, and
/// spliced results are never re-scanned for markers.
pub fn resolve_eval_markers(text: &str) -> String {
    let mut out = text.to_string();
    loop {
        let Some(open) = out.rfind(MARKER) else {
            return out;
        };
        let body_start = open + MARKER.len();
        match out[body_start..].find('}') {
            Some(offset) => {
                let close = body_start + offset;
                let replacement = match evaluate(&out[body_start..close]) {
                    Ok(value) => render_value(value),
                    Err(err) => format!("[eval error: {}]", err),
                };
                out.replace_range(open..close + 1, &replacement);
            }
            None => {
                let notice = format!("[eval error: {}]", EvalError::UnterminatedMarker);
                out.replace_range(open..body_start, &notice);
            }
        }
    }
}
