//! Validate command - check templates without generating anything

use anyhow::{bail, Context, Result};
use colored::Colorize;
use quizmill_core::bank::QuestionBank;
use quizmill_core::config::PackageConfig;
use quizmill_core::template;
use serde_json::json;

use crate::cli::ValidateArgs;

/// Validate every template in a bank
///
/// # Arguments
///
/// * `args` - Parsed validate arguments
/// * `verbose` - Enable verbose output if true
///
/// # Exit Code
///
/// Returns an error (exit code 1) if any template fails validation, so
/// the command can gate CI pipelines.
pub fn run(args: ValidateArgs, verbose: bool) -> Result<()> {
    let bank = QuestionBank::from_file(&args.bank)
        .with_context(|| format!("failed to load question bank '{}'", args.bank.display()))?;

    let config = PackageConfig {
        placeholder_sigil: args.sigil,
        math_delimiter: args.delimiter,
        ..PackageConfig::default()
    };
    let syntax = config.syntax()?;

    let mut failures: Vec<(String, String)> = Vec::new();
    for question in &bank.questions {
        match template::validate(question, syntax) {
            Ok(()) => {
                if verbose && !args.json {
                    println!("{} {}", "✓".green(), question.id);
                }
            }
            Err(err) => failures.push((question.id.clone(), err.to_string())),
        }
    }

    if args.json {
        let output = json!({
            "templates": bank.questions.len(),
            "failures": failures
                .iter()
                .map(|(id, reason)| json!({ "template": id, "reason": reason }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if failures.is_empty() {
        println!(
            "{} {} template(s) valid",
            "✓".green().bold(),
            bank.questions.len()
        );
    } else {
        for (id, reason) in &failures {
            println!("{} {}: {}", "✗".red().bold(), id, reason);
        }
    }

    if !failures.is_empty() {
        bail!(
            "{} of {} template(s) failed validation",
            failures.len(),
            bank.questions.len()
        );
    }

    Ok(())
}
