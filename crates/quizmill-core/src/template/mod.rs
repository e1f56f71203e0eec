//! Template instantiation: tokenizing, variable binding, and expansion

mod bind;
mod expand;
mod tokenize;

pub use bind::{draw_binding, Binding};
pub use expand::{expand, validate, ConcreteQuestion, FieldText, Span};
pub use tokenize::TemplateSyntax;

#[cfg(test)]
mod tests;
