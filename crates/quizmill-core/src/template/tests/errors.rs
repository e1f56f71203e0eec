//! Validation and expansion error tests

use super::helpers::{arithmetic_template, binding_of};
use super::*;
use crate::bank::VariableValue;
use crate::error::QuizmillError;

#[test]
fn test_validate_accepts_well_formed_template() {
    assert!(validate(&arithmetic_template(), TemplateSyntax::default()).is_ok());
}

#[test]
fn test_validate_unbound_placeholder() {
    let mut template = arithmetic_template();
    template.prompt = "What is ~x + ~z?".to_string();
    match validate(&template, TemplateSyntax::default()) {
        Err(QuizmillError::UnboundPlaceholder {
            template_id,
            sigil,
            name,
        }) => {
            assert_eq!(template_id, "q1");
            assert_eq!(sigil, '~');
            assert_eq!(name, "z");
        }
        other => panic!("Expected UnboundPlaceholder error, got: {:?}", other),
    }
}

#[test]
fn test_validate_unbound_placeholder_inside_math() {
    let mut template = arithmetic_template();
    template.prompt = "Compute $~q^2$".to_string();
    match validate(&template, TemplateSyntax::default()) {
        Err(QuizmillError::UnboundPlaceholder { name, .. }) => assert_eq!(name, "q"),
        other => panic!("Expected UnboundPlaceholder error, got: {:?}", other),
    }
}

#[test]
fn test_validate_empty_domain() {
    let mut template = arithmetic_template();
    template.variables.insert("y".to_string(), vec![]);
    match validate(&template, TemplateSyntax::default()) {
        Err(QuizmillError::EmptyDomain { template_id, name }) => {
            assert_eq!(template_id, "q1");
            assert_eq!(name, "y");
        }
        other => panic!("Expected EmptyDomain error, got: {:?}", other),
    }
}

#[test]
fn test_validate_unbalanced_math_names_field() {
    let mut template = arithmetic_template();
    template.choices[1] = "$~y".to_string();
    match validate(&template, TemplateSyntax::default()) {
        Err(QuizmillError::MathUnbalanced {
            template_id,
            field,
            delimiter,
        }) => {
            assert_eq!(template_id, "q1");
            assert_eq!(field, "choice 2");
            assert_eq!(delimiter, '$');
        }
        other => panic!("Expected MathUnbalanced error, got: {:?}", other),
    }
}

#[test]
fn test_validate_accepts_unreferenced_variables() {
    let mut template = arithmetic_template();
    template
        .variables
        .insert("unused".to_string(), vec![VariableValue::Integer(1)]);
    assert!(validate(&template, TemplateSyntax::default()).is_ok());
}

#[test]
fn test_expand_correct_matching_none() {
    let mut template = arithmetic_template();
    template.correct = "eval{~x*100}".to_string();
    let binding = binding_of(&[("x", 2), ("y", 4)]);
    match expand(
        &template,
        &binding,
        "q1_v1".to_string(),
        TemplateSyntax::default(),
    ) {
        Err(QuizmillError::CorrectMismatch {
            template_id,
            matched,
        }) => {
            assert_eq!(template_id, "q1");
            assert_eq!(matched, 0);
        }
        other => panic!("Expected CorrectMismatch error, got: {:?}", other),
    }
}

#[test]
fn test_expand_correct_matching_twice() {
    let mut template = arithmetic_template();
    template.choices = vec!["eval{~x+~y}".to_string(), "eval{~y+~x}".to_string()];
    let binding = binding_of(&[("x", 2), ("y", 4)]);
    match expand(
        &template,
        &binding,
        "q1_v1".to_string(),
        TemplateSyntax::default(),
    ) {
        Err(QuizmillError::CorrectMismatch { matched, .. }) => assert_eq!(matched, 2),
        other => panic!("Expected CorrectMismatch error, got: {:?}", other),
    }
}

#[test]
fn test_expand_without_validate_still_catches_unbound() {
    let mut template = arithmetic_template();
    template.prompt = "~missing".to_string();
    let binding = binding_of(&[("x", 2), ("y", 4)]);
    match expand(
        &template,
        &binding,
        "q1_v1".to_string(),
        TemplateSyntax::default(),
    ) {
        Err(QuizmillError::UnboundPlaceholder { name, .. }) => {
            assert_eq!(name, "missing");
        }
        other => panic!("Expected UnboundPlaceholder error, got: {:?}", other),
    }
}

#[test]
fn test_template_validation_class() {
    let err = QuizmillError::CorrectMismatch {
        template_id: "q1".to_string(),
        matched: 0,
    };
    assert!(err.is_template_validation());
    let err = QuizmillError::ScoringMismatch {
        item_id: "q1_v1".to_string(),
        matched: 0,
    };
    assert!(!err.is_template_validation());
}
