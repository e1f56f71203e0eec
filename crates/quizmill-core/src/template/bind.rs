//! Variable binding: drawing concrete values for one template instance

use crate::bank::{QuestionTemplate, VariableValue};
use crate::error::{QuizmillError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// One concrete value for every variable a template declares.
///
/// A binding is drawn once per instance and applied uniformly to all of
/// the instance's text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    values: BTreeMap<String, VariableValue>,
}

impl Binding {
    /// Build a binding from explicit values, bypassing the draw. Mainly
    /// useful for tests and fixed expansions.
    pub fn from_values(values: BTreeMap<String, VariableValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&VariableValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Draw one binding for `template`: an independent uniform choice from
/// each declared candidate set.
///
/// Declared variables iterate in name order, so a seeded RNG reproduces
/// the same draws run after run.
pub fn draw_binding(template: &QuestionTemplate, rng: &mut impl Rng) -> Result<Binding> {
    let mut values = BTreeMap::new();
    for (name, candidates) in &template.variables {
        let value = candidates
            .choose(rng)
            .ok_or_else(|| QuizmillError::EmptyDomain {
                template_id: template.id.clone(),
                name: name.clone(),
            })?;
        values.insert(name.clone(), value.clone());
    }
    Ok(Binding { values })
}
