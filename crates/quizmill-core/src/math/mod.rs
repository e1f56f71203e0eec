//! Inline math extraction and rendering references
//!
//! A run owns one `MathIndex`: every distinct math source expression gets
//! exactly one rendering reference, whichever strategy is active, and
//! asset-backed references keep their first-reference order for the
//! manifest.

mod renderer;

pub use renderer::{AssetWriter, LocalMathRenderer, MathRef, MathRenderer, RemoteMathRenderer};

use crate::qti::xml::{escape_attr, escape_text};
use crate::qti::RenderedQuestion;
use crate::template::{ConcreteQuestion, FieldText, Span};
use std::collections::HashMap;

/// Run-wide de-duplication of extracted math segments.
#[derive(Default)]
pub struct MathIndex {
    refs: HashMap<String, MathRef>,
    order: Vec<String>,
}

impl MathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct segment sources seen so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn reference(&self, source: &str) -> Option<&MathRef> {
        self.refs.get(source)
    }

    /// (source, archive path) for every asset-backed reference, in
    /// first-reference order.
    pub fn assets(&self) -> Vec<(&str, &str)> {
        self.order
            .iter()
            .filter_map(|source| match self.refs.get(source) {
                Some(MathRef::Asset(path)) => Some((source.as_str(), path.as_str())),
                _ => None,
            })
            .collect()
    }

    fn resolve(&mut self, source: &str, renderer: &dyn MathRenderer) -> MathRef {
        if let Some(reference) = self.refs.get(source) {
            return reference.clone();
        }
        let reference = renderer.render(source);
        self.refs.insert(source.to_string(), reference.clone());
        self.order.push(source.to_string());
        reference
    }
}

/// Splice rendering references into one instance, producing the final
/// HTML fragments the encoder writes.
///
/// Identical segment sources resolve through the shared index, so fields
/// that were equal before splicing stay equal after it.
pub fn render_question(
    question: ConcreteQuestion,
    index: &mut MathIndex,
    renderer: &dyn MathRenderer,
) -> RenderedQuestion {
    let prompt = render_field(&question.prompt, index, renderer);
    let choices = question
        .choices
        .iter()
        .map(|choice| render_field(choice, index, renderer))
        .collect();
    let correct = render_field(&question.correct, index, renderer);
    RenderedQuestion {
        id: question.id,
        prompt,
        choices,
        correct,
    }
}

/// HTML fragment for one field: text escaped, math segments replaced by
/// `<img>` references in order.
fn render_field(field: &FieldText, index: &mut MathIndex, renderer: &dyn MathRenderer) -> String {
    let mut out = String::new();
    for span in field.spans() {
        match span {
            Span::Text(text) => out.push_str(&escape_text(text)),
            Span::Math(source) => {
                let reference = index.resolve(source, renderer);
                out.push_str(&inline_markup(source, &reference));
            }
        }
    }
    out
}

fn inline_markup(source: &str, reference: &MathRef) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\"/>",
        escape_attr(reference.href()),
        escape_attr(source)
    )
}
