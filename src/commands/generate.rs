//! `railjson generate` - Convert a description into a RailJson document
//!
//! Loads the description, runs the checks (unless `--skip-checks`), converts
//! and writes the document, then prints a summary with the SHA-256 digest of
//! the written bytes.

use super::check::{print_report, validate};
use railjson_gen::core::config::GeneratorConfig;
use railjson_gen::core::error::{InfraError, InfraResult, ValidationError};
use railjson_gen::io::{document_digest, load_description, write_document};
use std::path::{Path, PathBuf};

/// Output path used when neither `--output` nor `output.path` is set
pub fn default_output_path(input: &Path) -> PathBuf {
  let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("infra");
  input.with_file_name(format!("{}.railjson.json", stem))
}

/// Run the generate command
pub fn run_generate(
  config: &GeneratorConfig,
  input: &Path,
  output: Option<PathBuf>,
  skip_checks: bool,
  json: bool,
) -> InfraResult<()> {
  let infra = load_description(input)?;

  if skip_checks {
    tracing::debug!("checks skipped");
  } else {
    let strict = config.validation.fail_on_warnings;
    let report = validate(&infra, config, false);
    if !report.passed(strict) {
      if json {
        println!("{}", report.to_json()?);
      } else {
        print_report(&report);
      }
      return Err(InfraError::Validation(ValidationError::ChecksFailed {
        failed: report.blocking(strict),
      }));
    }
  }

  let output = output
    .or_else(|| config.output.path.clone())
    .unwrap_or_else(|| default_output_path(input));

  let document = infra.to_wire();
  let text = write_document(&document, &output, config.output.indent)?;
  let digest = document_digest(text.as_bytes());
  let counts = document.counts();

  if json {
    let summary = serde_json::json!({
      "output": output.display().to_string(),
      "version": document.version,
      "sha256": digest,
      "counts": counts,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    return Ok(());
  }

  println!("✅ Wrote {} (RailJson {})", output.display(), document.version);
  for (collection, count) in counts.entries() {
    if count > 0 {
      println!("   {:<22} {}", collection, count);
    }
  }
  println!("   sha256: {}", digest);
  Ok(())
}
