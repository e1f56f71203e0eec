//! Tokenization for question templates
//!
//! Provides a single forward pass that splits template text into literal
//! runs, `~name` placeholders, and `$...$` math segments. Each character
//! is processed exactly once; substituted values are never re-scanned.

use std::iter::Peekable;
use std::str::CharIndices;

/// Marker characters the tokenizer recognizes.
///
/// Both markers are configurable per run and must be distinct characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSyntax {
    /// Introduces a `~name` placeholder reference.
    pub sigil: char,
    /// Bounds an inline math segment. Delimiters pair non-greedily: the
    /// next delimiter closes the open segment.
    pub math_delimiter: char,
}

impl Default for TemplateSyntax {
    fn default() -> Self {
        Self {
            sigil: '~',
            math_delimiter: '$',
        }
    }
}

/// One tokenized piece of template text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// A run of plain text with escape sequences already folded.
    Literal(String),
    /// A `~name` placeholder reference.
    Placeholder { name: String },
    /// One `$...$` segment, delimiters stripped. Placeholders are
    /// recognized inside the body; nested math is not, so the body is a
    /// flat inline sequence.
    Math { body: Vec<Inline> },
}

/// A token allowed inside a math segment body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Inline {
    Literal(String),
    Placeholder { name: String },
}

/// Tokenization failure: the text ended inside an open math segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnbalancedMath {
    /// Byte offset of the delimiter that opened the unterminated segment.
    pub opened_at: usize,
}

/// Split `text` into tokens in one forward pass.
///
/// Recognition rules:
/// - a doubled sigil (`~~`) folds to one literal sigil character
/// - a sigil not followed by an identifier character stays literal text
/// - identifiers are `[A-Za-z_][A-Za-z0-9_]*`; the first character past
///   the identifier ends the placeholder
/// - the math delimiter toggles between text and math scanning; a
///   segment still open at end of input is an error
pub(crate) fn tokenize(
    text: &str,
    syntax: TemplateSyntax,
) -> Result<Vec<Token>, UnbalancedMath> {
    debug_assert_ne!(syntax.sigil, syntax.math_delimiter);

    let mut tokens = Vec::new();
    let mut body = Vec::new();
    let mut literal = String::new();
    let mut open_math: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch == syntax.sigil {
            if matches!(chars.peek(), Some(&(_, next)) if next == syntax.sigil) {
                chars.next();
                literal.push(syntax.sigil);
                continue;
            }
            let name = take_identifier(&mut chars);
            if name.is_empty() {
                literal.push(syntax.sigil);
            } else if open_math.is_some() {
                flush_math(&mut literal, &mut body);
                body.push(Inline::Placeholder { name });
            } else {
                flush_text(&mut literal, &mut tokens);
                tokens.push(Token::Placeholder { name });
            }
        } else if ch == syntax.math_delimiter {
            match open_math {
                None => {
                    flush_text(&mut literal, &mut tokens);
                    open_math = Some(pos);
                }
                Some(_) => {
                    flush_math(&mut literal, &mut body);
                    tokens.push(Token::Math {
                        body: std::mem::take(&mut body),
                    });
                    open_math = None;
                }
            }
        } else {
            literal.push(ch);
        }
    }

    if let Some(opened_at) = open_math {
        return Err(UnbalancedMath { opened_at });
    }
    flush_text(&mut literal, &mut tokens);
    Ok(tokens)
}

fn flush_text(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

fn flush_math(literal: &mut String, body: &mut Vec<Inline>) {
    if !literal.is_empty() {
        body.push(Inline::Literal(std::mem::take(literal)));
    }
}

/// Consume the longest identifier at the cursor, possibly empty.
fn take_identifier(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut name = String::new();
    while let Some(&(_, ch)) = chars.peek() {
        let accepted = if name.is_empty() {
            ch == '_' || ch.is_ascii_alphabetic()
        } else {
            ch == '_' || ch.is_ascii_alphanumeric()
        };
        if !accepted {
            break;
        }
        name.push(ch);
        chars.next();
    }
    name
}

/// Every placeholder name referenced by `tokens`, math bodies included.
pub(crate) fn placeholder_names(tokens: &[Token]) -> Vec<&str> {
    let mut names = Vec::new();
    for token in tokens {
        match token {
            Token::Placeholder { name } => names.push(name.as_str()),
            Token::Math { body } => {
                for inline in body {
                    if let Inline::Placeholder { name } = inline {
                        names.push(name.as_str());
                    }
                }
            }
            Token::Literal(_) => {}
        }
    }
    names
}
