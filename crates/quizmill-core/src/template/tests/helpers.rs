//! Shared test helpers for template tests

use crate::bank::{QuestionTemplate, VariableValue};
use crate::template::Binding;
use std::collections::BTreeMap;

/// The worked arithmetic example: two integer variables, one computed
/// choice and a computed correct answer.
pub(super) fn arithmetic_template() -> QuestionTemplate {
    let mut variables = BTreeMap::new();
    variables.insert(
        "x".to_string(),
        vec![VariableValue::Integer(2), VariableValue::Integer(3)],
    );
    variables.insert(
        "y".to_string(),
        vec![VariableValue::Integer(4), VariableValue::Integer(5)],
    );
    QuestionTemplate {
        id: "q1".to_string(),
        prompt: "What is ~x + ~y?".to_string(),
        choices: vec![
            "~x".to_string(),
            "~y".to_string(),
            "eval{~x+~y}".to_string(),
        ],
        correct: "eval{~x+~y}".to_string(),
        variables,
    }
}

/// Template whose prompt carries one inline math segment.
pub(super) fn math_template() -> QuestionTemplate {
    let mut variables = BTreeMap::new();
    variables.insert("a".to_string(), vec![VariableValue::Integer(3)]);
    QuestionTemplate {
        id: "squares".to_string(),
        prompt: "Compute $~a^2$".to_string(),
        choices: vec!["eval{~a^2}".to_string(), "0".to_string()],
        correct: "eval{~a^2}".to_string(),
        variables,
    }
}

/// Fixed integer binding, bypassing the RNG.
pub(super) fn binding_of(pairs: &[(&str, i64)]) -> Binding {
    let mut values = BTreeMap::new();
    for (name, value) in pairs {
        values.insert(name.to_string(), VariableValue::Integer(*value));
    }
    Binding::from_values(values)
}
