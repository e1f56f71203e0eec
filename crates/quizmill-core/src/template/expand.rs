//! Template expansion: substitution, expression resolution, and the
//! scoring post-condition

use crate::bank::QuestionTemplate;
use crate::error::{QuizmillError, Result};
use crate::expr;
use crate::template::bind::Binding;
use crate::template::tokenize::{
    placeholder_names, tokenize, Inline, TemplateSyntax, Token,
};

/// One rendered piece of a question field.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    /// Plain display text.
    Text(String),
    /// The source expression of one inline math segment.
    Math(String),
}

/// A fully substituted question field.
///
/// Kept structured so later math splicing never re-scans text. Delimiter
/// characters that arrive inside substituted values stay inert.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldText {
    spans: Vec<Span>,
}

impl FieldText {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn has_math(&self) -> bool {
        self.spans.iter().any(|span| matches!(span, Span::Math(_)))
    }

    /// Display form with math segments re-wrapped in `delimiter`. This is
    /// the form correct-answer matching compares.
    pub fn plain(&self, delimiter: char) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Text(text) => out.push_str(text),
                Span::Math(source) => {
                    out.push(delimiter);
                    out.push_str(source);
                    out.push(delimiter);
                }
            }
        }
        out
    }
}

/// One instantiated question. Every field was substituted with the same
/// binding and eval-resolved; the scoring post-condition already holds.
#[derive(Debug, Clone)]
pub struct ConcreteQuestion {
    pub id: String,
    pub prompt: FieldText,
    pub choices: Vec<FieldText>,
    pub correct: FieldText,
}

/// Check a template's static invariants without drawing any values.
///
/// Catches empty candidate sets, unterminated math segments, and
/// placeholders no declared variable backs. Declared variables that no
/// field references are fine.
pub fn validate(template: &QuestionTemplate, syntax: TemplateSyntax) -> Result<()> {
    for (name, candidates) in &template.variables {
        if candidates.is_empty() {
            return Err(QuizmillError::EmptyDomain {
                template_id: template.id.clone(),
                name: name.clone(),
            });
        }
    }

    for (field, text) in fields(template) {
        let tokens = tokenize(text, syntax).map_err(|_| QuizmillError::MathUnbalanced {
            template_id: template.id.clone(),
            field: field.clone(),
            delimiter: syntax.math_delimiter,
        })?;
        for name in placeholder_names(&tokens) {
            if !template.variables.contains_key(name) {
                return Err(QuizmillError::UnboundPlaceholder {
                    template_id: template.id.clone(),
                    sigil: syntax.sigil,
                    name: name.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Expand one template with one binding into the instance named
/// `instance_id`.
///
/// The same binding substitutes every field, embedded `eval{...}` bodies
/// resolve afterwards, and the result must satisfy the scoring
/// post-condition: exactly one choice equals the expanded correct answer.
pub fn expand(
    template: &QuestionTemplate,
    binding: &Binding,
    instance_id: String,
    syntax: TemplateSyntax,
) -> Result<ConcreteQuestion> {
    let prompt = expand_field(template, &template.prompt, "prompt", binding, syntax)?;

    let mut choices = Vec::with_capacity(template.choices.len());
    for (i, choice) in template.choices.iter().enumerate() {
        let field = format!("choice {}", i + 1);
        choices.push(expand_field(template, choice, &field, binding, syntax)?);
    }

    let correct = expand_field(template, &template.correct, "correct", binding, syntax)?;

    let answer = correct.plain(syntax.math_delimiter);
    let matched = choices
        .iter()
        .filter(|choice| choice.plain(syntax.math_delimiter) == answer)
        .count();
    if matched != 1 {
        return Err(QuizmillError::CorrectMismatch {
            template_id: template.id.clone(),
            matched,
        });
    }

    Ok(ConcreteQuestion {
        id: instance_id,
        prompt,
        choices,
        correct,
    })
}

fn fields(template: &QuestionTemplate) -> Vec<(String, &str)> {
    let mut fields = vec![("prompt".to_string(), template.prompt.as_str())];
    for (i, choice) in template.choices.iter().enumerate() {
        fields.push((format!("choice {}", i + 1), choice.as_str()));
    }
    fields.push(("correct".to_string(), template.correct.as_str()));
    fields
}

fn expand_field(
    template: &QuestionTemplate,
    text: &str,
    field: &str,
    binding: &Binding,
    syntax: TemplateSyntax,
) -> Result<FieldText> {
    let tokens = tokenize(text, syntax).map_err(|_| QuizmillError::MathUnbalanced {
        template_id: template.id.clone(),
        field: field.to_string(),
        delimiter: syntax.math_delimiter,
    })?;

    let mut spans = Vec::new();
    let mut buf = String::new();
    for token in &tokens {
        match token {
            Token::Literal(literal) => buf.push_str(literal),
            Token::Placeholder { name } => {
                buf.push_str(&lookup(template, binding, name, syntax)?);
            }
            Token::Math { body } => {
                if !buf.is_empty() {
                    spans.push(Span::Text(std::mem::take(&mut buf)));
                }
                let mut source = String::new();
                for inline in body {
                    match inline {
                        Inline::Literal(literal) => source.push_str(literal),
                        Inline::Placeholder { name } => {
                            source.push_str(&lookup(template, binding, name, syntax)?);
                        }
                    }
                }
                spans.push(Span::Math(source));
            }
        }
    }
    if !buf.is_empty() {
        spans.push(Span::Text(buf));
    }

    // Markers may have been assembled from several tokens, so resolution
    // runs on whole spans, math bodies included.
    for span in &mut spans {
        match span {
            Span::Text(text) | Span::Math(text) => {
                *text = expr::resolve_eval_markers(text);
            }
        }
    }

    Ok(FieldText { spans })
}

fn lookup(
    template: &QuestionTemplate,
    binding: &Binding,
    name: &str,
    syntax: TemplateSyntax,
) -> Result<String> {
    match binding.get(name) {
        Some(value) => Ok(value.to_string()),
        None => Err(QuizmillError::UnboundPlaceholder {
            template_id: template.id.clone(),
            sigil: syntax.sigil,
            name: name.to_string(),
        }),
    }
}
