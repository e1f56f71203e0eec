//! Tests for template instantiation
//!
//! Organized into focused submodules mirroring the pipeline: tokenizing,
//! expansion, and validation errors.

use super::*;

// Test helper functions
mod helpers;

// Tokenizer tests
mod tokenize;


// Error and edge case tests
mod errors;
