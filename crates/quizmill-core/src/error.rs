use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizmillError {
    // Bank errors
    #[error("BANK_PARSE_ERROR: failed to parse question bank: {0}")]
    BankParse(String),

    // Configuration errors
    #[error("CONFIG_MARKER_COLLISION: placeholder sigil and math delimiter are both '{0}'")]
    MarkerCollision(char),

    // Template validation errors
    #[error("TEMPLATE_UNBOUND_PLACEHOLDER: template '{template_id}' references '{sigil}{name}' but declares no variable '{name}'")]
    UnboundPlaceholder {
        template_id: String,
        sigil: char,
        name: String,
    },

    #[error("TEMPLATE_EMPTY_DOMAIN: variable '{name}' of template '{template_id}' has no candidate values")]
    EmptyDomain { template_id: String, name: String },

    #[error("TEMPLATE_CORRECT_MISMATCH: template '{template_id}': expanded correct answer matches {matched} choice(s), expected exactly 1")]
    CorrectMismatch { template_id: String, matched: usize },

    #[error("TEMPLATE_MATH_UNBALANCED: template '{template_id}': {field} has an unterminated '{delimiter}' math segment")]
    MathUnbalanced {
        template_id: String,
        field: String,
        delimiter: char,
    },

    // Encoding errors
    #[error("ENCODE_SCORING_MISMATCH: item '{item_id}': {matched} choice(s) equal the correct answer, expected exactly 1")]
    ScoringMismatch { item_id: String, matched: usize },

    #[error("ENCODE_DUPLICATE_ID: item identifier '{0}' generated more than once")]
    DuplicateItemId(String),

    // Packaging errors
    #[error("PACKAGE_ARCHIVE_FAILED: {0}")]
    ArchiveFailed(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl QuizmillError {
    /// True for the template-validation class: the offending template can
    /// be dropped from the run without affecting any other template.
    pub fn is_template_validation(&self) -> bool {
        matches!(
            self,
            QuizmillError::UnboundPlaceholder { .. }
                | QuizmillError::EmptyDomain { .. }
                | QuizmillError::CorrectMismatch { .. }
                | QuizmillError::MathUnbalanced { .. }
        )
    }
}

impl From<serde_json::Error> for QuizmillError {
    fn from(err: serde_json::Error) -> Self {
        QuizmillError::BankParse(err.to_string())
    }
}

impl From<zip::result::ZipError> for QuizmillError {
    fn from(err: zip::result::ZipError) -> Self {
        QuizmillError::ArchiveFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuizmillError>;
