//! Generate command - expand a question bank into a QTI archive

use anyhow::{Context, Result};
use colored::Colorize;
use quizmill_core::bank::QuestionBank;
use quizmill_core::config::{InvalidTemplatePolicy, PackageConfig};
use quizmill_core::math::{AssetWriter, LocalMathRenderer, MathRenderer, RemoteMathRenderer};
use quizmill_core::package::{build_package, PackageOutcome};
use serde_json::json;

use crate::cli::{GenerateArgs, MathMode};

/// Generate a QTI archive from a bank of templates
///
/// # Arguments
///
/// * `args` - Parsed generate arguments
/// * `verbose` - Enable verbose output if true
pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let bank = QuestionBank::from_file(&args.bank)
        .with_context(|| format!("failed to load question bank '{}'", args.bank.display()))?;

    if verbose {
        println!(
            "{} Loaded {} template(s) from '{}'",
            "→".cyan(),
            bank.questions.len(),
            args.bank.display()
        );
    }

    let config = PackageConfig {
        variants_per_template: args.variants,
        placeholder_sigil: args.sigil,
        math_delimiter: args.delimiter,
        on_invalid: if args.strict {
            InvalidTemplatePolicy::Abort
        } else {
            InvalidTemplatePolicy::Skip
        },
        seed: args.seed,
    };

    let renderer: Box<dyn MathRenderer> = match args.math {
        MathMode::Remote => {
            let remote = RemoteMathRenderer::from_base(&args.math_url)
                .with_context(|| format!("invalid math base URL '{}'", args.math_url))?;
            Box::new(remote)
        }
        MathMode::Local => Box::new(LocalMathRenderer::with_extension(svg_writer(), "svg")),
    };

    let outcome = build_package(&bank, &config, renderer.as_ref(), &args.out)?;

    for skipped in &outcome.skipped {
        eprintln!(
            "{} Skipped template '{}': {}",
            "!".yellow(),
            skipped.template_id,
            skipped.reason
        );
    }

    if args.json {
        render_json(&outcome)?;
    } else {
        render_human(&outcome, verbose);
    }

    Ok(())
}

/// Render the run outcome as JSON
fn render_json(outcome: &PackageOutcome) -> Result<()> {
    let output = json!({
        "archive": outcome.archive_path.display().to_string(),
        "items": outcome
            .items
            .iter()
            .map(|(file, id)| json!({ "file": file, "id": id }))
            .collect::<Vec<_>>(),
        "assets": outcome.assets,
        "skipped": outcome
            .skipped
            .iter()
            .map(|s| json!({ "template": s.template_id, "reason": s.reason }))
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Render the run outcome in human-readable form
fn render_human(outcome: &PackageOutcome, verbose: bool) {
    if verbose {
        for (file, id) in &outcome.items {
            println!("{} {} ({})", "→".cyan(), file, id);
        }
        for asset in &outcome.assets {
            println!("{} {}", "→".cyan(), asset);
        }
    }

    println!(
        "{} Packaged {} question(s) into '{}'",
        "✓".green().bold(),
        outcome.items.len(),
        outcome.archive_path.display()
    );
}

/// Asset writer for local mode.
///
/// Renders each equation as a minimal SVG carrying the source text, so
/// archives stay self-contained without an external rendering service.
fn svg_writer() -> AssetWriter {
    Box::new(|source, target| {
        let mut text = String::with_capacity(source.len());
        for ch in source.chars() {
            match ch {
                '&' => text.push_str("&amp;"),
                '<' => text.push_str("&lt;"),
                '>' => text.push_str("&gt;"),
                _ => text.push(ch),
            }
        }
        let svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"24\">\
             <text x=\"0\" y=\"18\" font-family=\"serif\">{}</text>\
             </svg>\n",
            text
        );
        std::fs::write(target, svg)
    })
}
