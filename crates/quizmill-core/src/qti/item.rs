//! QTI 1.2 assessment item documents

use crate::error::{QuizmillError, Result};
use crate::qti::xml::XmlWriter;
use crate::qti::RenderedQuestion;

/// Identifier of the nth choice (1-based), stable across runs.
fn choice_ident(index: usize) -> String {
    format!("choice{}", index + 1)
}

/// Encode one instance as a QTI 1.2 `questestinterop` document.
///
/// Scoring awards SCORE = 100 for the single choice equal to the correct
/// answer and 0 otherwise. The equality is re-checked here against the
/// final rendered text so that an item can never ship with scoring that
/// points at the wrong choice.
pub fn encode_item(question: &RenderedQuestion) -> Result<String> {
    let matches: Vec<usize> = question
        .choices
        .iter()
        .enumerate()
        .filter(|(_, choice)| *choice == &question.correct)
        .map(|(index, _)| index)
        .collect();
    let correct_index = match matches.as_slice() {
        [index] => *index,
        _ => {
            return Err(QuizmillError::ScoringMismatch {
                item_id: question.id.clone(),
                matched: matches.len(),
            })
        }
    };

    let mut xml = XmlWriter::new();
    xml.open("questestinterop", &[]);
    xml.open(
        "item",
        &[("ident", question.id.as_str()), ("title", question.id.as_str())],
    );

    xml.open("presentation", &[]);
    xml.open("material", &[]);
    xml.text_element("mattext", &[("texttype", "text/html")], &question.prompt);
    xml.close("material");
    xml.open(
        "response_lid",
        &[("ident", "response1"), ("rcardinality", "Single")],
    );
    xml.open("render_choice", &[]);
    for (index, choice) in question.choices.iter().enumerate() {
        let ident = choice_ident(index);
        xml.open("response_label", &[("ident", ident.as_str())]);
        xml.open("material", &[]);
        xml.text_element("mattext", &[("texttype", "text/html")], choice);
        xml.close("material");
        xml.close("response_label");
    }
    xml.close("render_choice");
    xml.close("response_lid");
    xml.close("presentation");

    xml.open("resprocessing", &[]);
    xml.open("outcomes", &[]);
    xml.leaf(
        "decvar",
        &[
            ("maxvalue", "100"),
            ("minvalue", "0"),
            ("varname", "SCORE"),
            ("vartype", "Decimal"),
        ],
    );
    xml.close("outcomes");
    xml.open("respcondition", &[("continue", "No")]);
    xml.open("conditionvar", &[]);
    xml.text_element(
        "varequal",
        &[("respident", "response1")],
        &choice_ident(correct_index),
    );
    xml.close("conditionvar");
    xml.text_element("setvar", &[("action", "Set"), ("varname", "SCORE")], "100");
    xml.close("respcondition");
    xml.close("resprocessing");

    xml.close("item");
    xml.close("questestinterop");
    Ok(xml.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> RenderedQuestion {
        RenderedQuestion {
            id: "q1_v1".to_string(),
            prompt: "What is 2 + 4?".to_string(),
            choices: vec!["2".to_string(), "4".to_string(), "6".to_string()],
            correct: "6".to_string(),
        }
    }

    #[test]
    fn test_encode_selects_correct_choice() {
        let xml = encode_item(&sample_question()).unwrap();
        assert!(xml.contains("<item ident=\"q1_v1\" title=\"q1_v1\">"));
        assert!(xml.contains("<response_label ident=\"choice3\">"));
        assert!(xml.contains("<varequal respident=\"response1\">choice3</varequal>"));
        assert!(xml.contains("<setvar action=\"Set\" varname=\"SCORE\">100</setvar>"));
    }

    #[test]
    fn test_encode_lists_choices_in_order() {
        let xml = encode_item(&sample_question()).unwrap();
        let first = xml.find("choice1").unwrap();
        let second = xml.find("choice2").unwrap();
        let third = xml.find("choice3").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let question = sample_question();
        assert_eq!(
            encode_item(&question).unwrap(),
            encode_item(&question).unwrap()
        );
    }

    #[test]
    fn test_encode_escapes_markup() {
        let mut question = sample_question();
        question.prompt = "Is 1 < 2 & 3 > 2?".to_string();
        question.choices[2] = "yes & no".to_string();
        question.correct = "yes & no".to_string();
        let xml = encode_item(&question).unwrap();
        assert!(xml.contains("Is 1 &lt; 2 &amp; 3 &gt; 2?"));
        assert!(xml.contains("yes &amp; no"));
        assert!(!xml.contains("Is 1 < 2"));
    }

    #[test]
    fn test_encode_rejects_unmatched_correct() {
        let mut question = sample_question();
        question.correct = "7".to_string();
        match encode_item(&question) {
            Err(QuizmillError::ScoringMismatch { item_id, matched }) => {
                assert_eq!(item_id, "q1_v1");
                assert_eq!(matched, 0);
            }
            other => panic!("Expected ScoringMismatch error, got: {:?}", other),
        }
    }

    #[test]
    fn test_encode_rejects_ambiguous_correct() {
        let mut question = sample_question();
        question.choices = vec!["6".to_string(), "6".to_string()];
        match encode_item(&question) {
            Err(QuizmillError::ScoringMismatch { matched, .. }) => assert_eq!(matched, 2),
            other => panic!("Expected ScoringMismatch error, got: {:?}", other),
        }
    }
}
