//! Canned question banks for testing
//!
//! This module provides ready-made bank JSON used by integration and
//! CLI tests, so individual tests do not repeat bank boilerplate.

/// A two-template arithmetic bank with placeholder and eval usage.
///
/// Every variant of both templates has exactly one choice equal to the
/// correct answer, so the bank always packages cleanly.
pub fn arithmetic_bank_json() -> &'static str {
    r#"{
  "questions": [
    {
      "id": "add",
      "prompt": "What is ~x + ~y?",
      "choices": ["eval{~x+~y}", "eval{~x+~y+1}", "eval{~x+~y-1}"],
      "correct": "eval{~x+~y}",
      "variables": {
        "x": [2, 3, 4],
        "y": [10, 20]
      }
    },
    {
      "id": "double",
      "prompt": "What is twice ~n?",
      "choices": ["eval{~n*2}", "eval{~n*3}"],
      "correct": "eval{~n*2}",
      "variables": {
        "n": [5, 6, 7]
      }
    }
  ]
}"#
}

/// A bank whose templates share one inline math expression.
///
/// Both prompts embed `$~a^2$` with the same single-value domain, so a
/// packaging run renders the identical math source from two templates.
pub fn math_bank_json() -> &'static str {
    r#"{
  "questions": [
    {
      "id": "square",
      "prompt": "Evaluate $~a^2$",
      "choices": ["eval{~a^2}", "eval{~a*2}"],
      "correct": "eval{~a^2}",
      "variables": {
        "a": [3]
      }
    },
    {
      "id": "square_root",
      "prompt": "Which number squared gives $~a^2$?",
      "choices": ["~a", "eval{~a+1}"],
      "correct": "~a",
      "variables": {
        "a": [3]
      }
    }
  ]
}"#
}

/// A single-template bank whose correct answer never matches a choice.
pub fn mismatched_bank_json() -> &'static str {
    r#"{
  "questions": [
    {
      "id": "broken",
      "prompt": "What is ~x?",
      "choices": ["eval{~x+1}", "eval{~x+2}"],
      "correct": "eval{~x*100}",
      "variables": {
        "x": [1, 2]
      }
    }
  ]
}"#
}

/// A bank mixing one invalid template with one valid template.
///
/// The first template references an undeclared variable and fails
/// validation; the second packages normally. Used to test skip and
/// abort handling.
pub fn mixed_bank_json() -> &'static str {
    r#"{
  "questions": [
    {
      "id": "unbound",
      "prompt": "What is ~missing?",
      "choices": ["1", "2"],
      "correct": "1",
      "variables": {
        "x": [1]
      }
    },
    {
      "id": "fine",
      "prompt": "Pick the smallest value.",
      "choices": ["1", "2", "3"],
      "correct": "1"
    }
  ]
}"#
}

/// An empty bank with no templates.
pub fn empty_bank_json() -> &'static str {
    r#"{ "questions": [] }"#
}
