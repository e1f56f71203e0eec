//! Question bank loading and data model

mod model;

pub use model::{QuestionBank, QuestionTemplate, VariableValue};
