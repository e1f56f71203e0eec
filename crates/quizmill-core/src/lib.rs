// Core modules
pub mod bank;
pub mod config;
pub mod error;
pub mod expr;
pub mod math;
pub mod package;
pub mod qti;
pub mod template;

// Re-export commonly used types
pub use error::{QuizmillError, Result};
