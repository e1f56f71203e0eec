//! CLI command structure using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use quizmill_core::math::RemoteMathRenderer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizmill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a QTI archive from a question bank
    Generate(GenerateArgs),

    /// Check every template in a bank without generating anything
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Question bank JSON file
    pub bank: PathBuf,

    /// Where to write the archive
    #[arg(short, long, default_value = "qti_package.zip")]
    pub out: PathBuf,

    /// Instances to generate per template
    #[arg(long, default_value_t = 4)]
    pub variants: u32,

    /// Fixed RNG seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Abort on the first invalid template instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// How inline math segments are rendered
    #[arg(long, value_enum, default_value = "remote")]
    pub math: MathMode,

    /// Base URL of the remote math rendering service
    #[arg(long, default_value = RemoteMathRenderer::DEFAULT_BASE)]
    pub math_url: String,

    /// Placeholder marker character
    #[arg(long, default_value_t = '~')]
    pub sigil: char,

    /// Inline math delimiter character
    #[arg(long, default_value_t = '$')]
    pub delimiter: char,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Question bank JSON file
    pub bank: PathBuf,

    /// Placeholder marker character
    #[arg(long, default_value_t = '~')]
    pub sigil: char,

    /// Inline math delimiter character
    #[arg(long, default_value_t = '$')]
    pub delimiter: char,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Strategy for turning inline math into displayable references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MathMode {
    /// Reference a remote rendering service by URL
    Remote,
    /// Write equation images into the archive
    Local,
}
