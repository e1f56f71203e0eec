//! Run configuration for package generation

use crate::error::{QuizmillError, Result};
use crate::template::TemplateSyntax;
use serde::{Deserialize, Serialize};

/// What a run does with a template that fails validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvalidTemplatePolicy {
    /// Record the failure and continue; the template contributes no files.
    Skip,
    /// Abort the whole run on the first invalid template.
    Abort,
}

impl Default for InvalidTemplatePolicy {
    fn default() -> Self {
        InvalidTemplatePolicy::Skip
    }
}

/// Explicit knobs for one generation run.
///
/// Nothing in here is global state; the assembler owns everything derived
/// from a config for the duration of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Instances generated per template.
    #[serde(default = "default_variants")]
    pub variants_per_template: u32,

    /// Marker introducing a `~name` placeholder.
    #[serde(default = "default_sigil")]
    pub placeholder_sigil: char,

    /// Paired delimiter bounding inline math segments.
    #[serde(default = "default_math_delimiter")]
    pub math_delimiter: char,

    /// Validation failure policy.
    #[serde(default)]
    pub on_invalid: InvalidTemplatePolicy,

    /// Fixed RNG seed for reproducible draws; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            variants_per_template: default_variants(),
            placeholder_sigil: default_sigil(),
            math_delimiter: default_math_delimiter(),
            on_invalid: InvalidTemplatePolicy::default(),
            seed: None,
        }
    }
}

impl PackageConfig {
    /// Marker characters as the tokenizer consumes them.
    ///
    /// The sigil and math delimiter must be distinct; a colliding pair
    /// is rejected here, before any field is scanned.
    pub fn syntax(&self) -> Result<TemplateSyntax> {
        if self.placeholder_sigil == self.math_delimiter {
            return Err(QuizmillError::MarkerCollision(self.placeholder_sigil));
        }
        Ok(TemplateSyntax {
            sigil: self.placeholder_sigil,
            math_delimiter: self.math_delimiter,
        })
    }
}

fn default_variants() -> u32 {
    4
}

fn default_sigil() -> char {
    '~'
}

fn default_math_delimiter() -> char {
    '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PackageConfig::default();
        assert_eq!(config.variants_per_template, 4);
        assert_eq!(config.placeholder_sigil, '~');
        assert_eq!(config.math_delimiter, '$');
        assert_eq!(config.on_invalid, InvalidTemplatePolicy::Skip);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: PackageConfig =
            serde_json::from_str(r#"{ "variants_per_template": 2, "on_invalid": "abort" }"#)
                .unwrap();
        assert_eq!(config.variants_per_template, 2);
        assert_eq!(config.on_invalid, InvalidTemplatePolicy::Abort);
        assert_eq!(config.placeholder_sigil, '~');
    }

    #[test]
    fn test_syntax_mirrors_config() {
        let config = PackageConfig {
            placeholder_sigil: '@',
            math_delimiter: '|',
            ..PackageConfig::default()
        };
        let syntax = config.syntax().unwrap();
        assert_eq!(syntax.sigil, '@');
        assert_eq!(syntax.math_delimiter, '|');
    }

    #[test]
    fn test_syntax_rejects_colliding_markers() {
        let config = PackageConfig {
            placeholder_sigil: '$',
            ..PackageConfig::default()
        };
        match config.syntax() {
            Err(QuizmillError::MarkerCollision(marker)) => assert_eq!(marker, '$'),
            other => panic!("Expected MarkerCollision error, got: {:?}", other),
        }
    }
}
