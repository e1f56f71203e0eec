//! Package assembly - instantiates a bank and zips the QTI documents

use crate::bank::QuestionBank;
use crate::config::{InvalidTemplatePolicy, PackageConfig};
use crate::error::{QuizmillError, Result};
use crate::math::{self, MathIndex, MathRenderer};
use crate::qti::{encode_item, encode_manifest, RenderedQuestion};
use crate::template;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Result of one packaging run.
#[derive(Debug)]
pub struct PackageOutcome {
    /// Final archive location.
    pub archive_path: PathBuf,
    /// Item documents written, in generation order: (filename, item id).
    pub items: Vec<(String, String)>,
    /// Asset files shipped under `images/`, in first-reference order.
    pub assets: Vec<String>,
    /// Templates rejected by validation under the skip policy.
    pub skipped: Vec<SkippedTemplate>,
}

/// A template excluded from the package, with the validation failure.
#[derive(Debug)]
pub struct SkippedTemplate {
    pub template_id: String,
    pub reason: String,
}

/// Run the whole pipeline for one bank.
///
/// # Steps
/// 1. Validate each template; skip or abort per `config.on_invalid`
/// 2. Draw bindings and expand `config.variants_per_template` instances
///    per template, allocating `<template-id>_v<N>` ids from one
///    run-wide counter
/// 3. Splice math references through one run-wide index
/// 4. Encode item documents and the manifest into a staging directory
/// 5. Zip with a fixed entry order and atomically rename onto `out_path`
///
/// The staging directory lives next to `out_path` so the final rename
/// stays on one filesystem, and it is removed on every exit path.
/// `out_path` itself only ever holds a complete archive.
pub fn build_package(
    bank: &QuestionBank,
    config: &PackageConfig,
    renderer: &dyn MathRenderer,
    out_path: &Path,
) -> Result<PackageOutcome> {
    let syntax = config.syntax()?;
    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Run-scoped state: version counter, math index, skip list.
    let mut next_version: u64 = 0;
    let mut index = MathIndex::new();
    let mut rendered: Vec<RenderedQuestion> = Vec::new();
    let mut skipped = Vec::new();

    for question in &bank.questions {
        if let Err(err) = template::validate(question, syntax) {
            match config.on_invalid {
                InvalidTemplatePolicy::Abort => return Err(err),
                InvalidTemplatePolicy::Skip => {
                    skipped.push(SkippedTemplate {
                        template_id: question.id.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            }
        }

        // A draw-dependent failure in any variant rejects the whole
        // template: it contributes zero files, not a partial set.
        let mut instances = Vec::with_capacity(config.variants_per_template as usize);
        let mut failure = None;
        for _ in 0..config.variants_per_template {
            let binding = match template::draw_binding(question, &mut rng) {
                Ok(binding) => binding,
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            };
            next_version += 1;
            let instance_id = format!("{}_v{}", question.id, next_version);
            match template::expand(question, &binding, instance_id, syntax) {
                Ok(instance) => instances.push(instance),
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
        }
        if let Some(err) = failure {
            match config.on_invalid {
                InvalidTemplatePolicy::Skip if err.is_template_validation() => {
                    skipped.push(SkippedTemplate {
                        template_id: question.id.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
                _ => return Err(err),
            }
        }

        for instance in instances {
            rendered.push(math::render_question(instance, &mut index, renderer));
        }
    }

    // Stage next to the destination so the final rename cannot cross
    // filesystems.
    let parent = out_dir(out_path);
    fs::create_dir_all(parent)?;
    let staging = TempDir::new_in(parent)?;
    let pkg_dir = staging.path().join("package");
    fs::create_dir(&pkg_dir)?;

    let mut items: Vec<(String, String)> = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (index_in_run, question) in rendered.iter().enumerate() {
        if !seen_ids.insert(question.id.as_str()) {
            return Err(QuizmillError::DuplicateItemId(question.id.clone()));
        }
        let filename = item_filename(index_in_run);
        let document = encode_item(question)?;
        fs::write(pkg_dir.join(&filename), document)?;
        items.push((filename, question.id.clone()));
    }

    let asset_refs = index.assets();
    if !asset_refs.is_empty() {
        fs::create_dir(pkg_dir.join("images"))?;
        for (source, href) in &asset_refs {
            renderer.write_asset(source, &pkg_dir.join(href))?;
        }
    }
    let assets: Vec<String> = asset_refs.iter().map(|(_, href)| href.to_string()).collect();

    let manifest = encode_manifest(&package_identifier(out_path), &items, &assets);
    fs::write(pkg_dir.join("imsmanifest.xml"), manifest)?;

    // Fixed entry order: items, manifest, assets.
    let mut entries: Vec<String> = items.iter().map(|(filename, _)| filename.clone()).collect();
    entries.push("imsmanifest.xml".to_string());
    entries.extend(assets.iter().cloned());

    let archive_tmp = staging.path().join("archive.zip");
    write_archive(&archive_tmp, &pkg_dir, &entries)?;
    fs::rename(&archive_tmp, out_path)?;

    Ok(PackageOutcome {
        archive_path: out_path.to_path_buf(),
        items,
        assets,
        skipped,
    })
}

/// Generation-order filename of the nth item document (0-based input).
fn item_filename(index: usize) -> String {
    format!("question{}.xml", index + 1)
}

/// Directory the archive lands in; an empty parent means the current
/// working directory.
fn out_dir(out_path: &Path) -> &Path {
    match out_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Manifest identifier derived from the archive's file stem.
fn package_identifier(out_path: &Path) -> String {
    let stem = out_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("qti_package");
    stem.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

fn write_archive(archive_path: &Path, pkg_dir: &Path, entries: &[String]) -> Result<()> {
    let file = fs::File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for entry in entries {
        writer.start_file(entry.as_str(), options)?;
        let bytes = fs::read(pkg_dir.join(entry))?;
        writer.write_all(&bytes)?;
    }
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_filenames_are_one_based() {
        assert_eq!(item_filename(0), "question1.xml");
        assert_eq!(item_filename(11), "question12.xml");
    }

    #[test]
    fn test_package_identifier_sanitizes_stem() {
        assert_eq!(package_identifier(Path::new("out/quiz 1.zip")), "quiz_1");
        assert_eq!(
            package_identifier(Path::new("algebra-week2.zip")),
            "algebra-week2"
        );
    }

    #[test]
    fn test_out_dir_defaults_to_current() {
        assert_eq!(out_dir(Path::new("quiz.zip")), Path::new("."));
        assert_eq!(out_dir(Path::new("dist/quiz.zip")), Path::new("dist"));
    }
}
