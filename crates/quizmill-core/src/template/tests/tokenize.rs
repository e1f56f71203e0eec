//! Tokenizer tests

use crate::template::tokenize::{tokenize, Inline, Token, UnbalancedMath};
use crate::template::TemplateSyntax;

fn scan(text: &str) -> Vec<Token> {
    tokenize(text, TemplateSyntax::default()).unwrap()
}

fn literal(text: &str) -> Token {
    Token::Literal(text.to_string())
}

fn placeholder(name: &str) -> Token {
    Token::Placeholder {
        name: name.to_string(),
    }
}

#[test]
fn test_plain_text_is_one_literal() {
    assert_eq!(scan("just words"), vec![literal("just words")]);
}

#[test]
fn test_placeholders_split_literals() {
    assert_eq!(
        scan("What is ~x + ~y?"),
        vec![
            literal("What is "),
            placeholder("x"),
            literal(" + "),
            placeholder("y"),
            literal("?"),
        ]
    );
}

#[test]
fn test_identifier_extends_over_digits_and_underscores() {
    assert_eq!(
        scan("~x1_y?"),
        vec![placeholder("x1_y"), literal("?")]
    );
}

#[test]
fn test_doubled_sigil_is_escape() {
    assert_eq!(scan("~~x"), vec![literal("~x")]);
    assert_eq!(scan("a ~~ b"), vec![literal("a ~ b")]);
}

#[test]
fn test_sigil_without_identifier_stays_literal() {
    assert_eq!(scan("100 ~ 200"), vec![literal("100 ~ 200")]);
    assert_eq!(scan("~5"), vec![literal("~5")]);
    assert_eq!(scan("ends with ~"), vec![literal("ends with ~")]);
}

#[test]
fn test_math_segment_is_tokenized() {
    assert_eq!(
        scan("Compute $a^2$"),
        vec![
            literal("Compute "),
            Token::Math {
                body: vec![Inline::Literal("a^2".to_string())],
            },
        ]
    );
}

#[test]
fn test_placeholder_inside_math_body() {
    assert_eq!(
        scan("$~a^2$"),
        vec![Token::Math {
            body: vec![
                Inline::Placeholder {
                    name: "a".to_string()
                },
                Inline::Literal("^2".to_string()),
            ],
        }]
    );
}

#[test]
fn test_delimiters_pair_non_greedily() {
    assert_eq!(
        scan("$a$c$d$"),
        vec![
            Token::Math {
                body: vec![Inline::Literal("a".to_string())],
            },
            literal("c"),
            Token::Math {
                body: vec![Inline::Literal("d".to_string())],
            },
        ]
    );
}

#[test]
fn test_empty_math_segment() {
    assert_eq!(scan("$$"), vec![Token::Math { body: vec![] }]);
}

#[test]
fn test_unterminated_math_is_error() {
    let err = tokenize("price: $100", TemplateSyntax::default()).unwrap_err();
    assert_eq!(err, UnbalancedMath { opened_at: 7 });
}

#[test]
fn test_custom_syntax_characters() {
    let syntax = TemplateSyntax {
        sigil: '@',
        math_delimiter: '|',
    };
    assert_eq!(
        tokenize("@x and |@x|", syntax).unwrap(),
        vec![
            Token::Placeholder {
                name: "x".to_string()
            },
            literal(" and "),
            Token::Math {
                body: vec![Inline::Placeholder {
                    name: "x".to_string()
                }],
            },
        ]
    );
}
