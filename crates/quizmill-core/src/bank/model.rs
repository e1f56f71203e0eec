use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One candidate value for a template variable.
///
/// Banks mix numeric and textual candidates freely; the display form is
/// what substitution splices into question text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Integer(value) => write!(f, "{}", value),
            VariableValue::Number(value) => write!(f, "{}", value),
            VariableValue::Text(value) => f.write_str(value),
        }
    }
}

/// One parameterized question: text fields referencing `~name` placeholders
/// plus the candidate sets those placeholders draw from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionTemplate {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct: String,
    #[serde(default)]
    pub variables: BTreeMap<String, Vec<VariableValue>>,
}

/// A loaded template collection, the unit one packaging run consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<QuestionTemplate>,
}

impl QuestionBank {
    /// Parse a bank from its JSON source.
    pub fn from_json(content: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a bank from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::error::QuizmillError::BankParse(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }
}
