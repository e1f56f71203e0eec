//! QTI 1.2 document encoding
//!
//! Produces the two document kinds a package carries: per-question
//! assessment items and the archive manifest. Encoding is deterministic,
//! so identical input yields byte-identical documents.

mod item;
mod manifest;
pub(crate) mod xml;

pub use item::encode_item;
pub use manifest::encode_manifest;

/// One question ready for encoding: substitution done, expressions
/// resolved, math spliced into an HTML fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuestion {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct: String,
}
