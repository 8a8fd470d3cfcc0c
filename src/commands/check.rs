//! `railjson check` - Run validation checks on a description
//!
//! Exits with the validation exit code when an error is found, or a warning
//! with `--strict` (or `fail_on_warnings` in railjson.toml).

use railjson_gen::checks::{CheckContext, CheckReport, Severity, create_default_runner};
use railjson_gen::core::config::GeneratorConfig;
use railjson_gen::core::error::{InfraError, InfraResult, ValidationError};
use railjson_gen::io::load_description;
use railjson_gen::model::Infra;
use std::path::Path;

/// Run the configured checks over `infra`
pub fn validate(infra: &Infra, config: &GeneratorConfig, thorough: bool) -> CheckReport {
  let mut runner = create_default_runner();
  runner.disable(&config.validation.disabled_checks);

  let ctx = CheckContext {
    infra,
    thorough: thorough || config.validation.thorough,
  };
  runner.run_all(&ctx)
}

/// Run the check command
pub fn run_check(config: &GeneratorConfig, input: &Path, thorough: bool, json: bool, strict: bool) -> InfraResult<()> {
  let infra = load_description(input)?;
  let report = validate(&infra, config, thorough);
  let strict = strict || config.validation.fail_on_warnings;

  if json {
    println!("{}", report.to_json()?);
  } else {
    println!("🔍 Checking {}", input.display());
    println!();
    print_report(&report);
  }

  if report.passed(strict) {
    return Ok(());
  }

  Err(InfraError::Validation(ValidationError::ChecksFailed {
    failed: report.blocking(strict),
  }))
}

/// Print one line per check, with suggestions and details for failures
pub fn print_report(report: &CheckReport) {
  for result in &report.results {
    let icon = match (result.passed, result.severity) {
      (true, _) => "✅",
      (false, Severity::Warning) => "⚠️ ",
      (false, _) => "❌",
    };
    println!("{} {}: {}", icon, result.check_name, result.message);

    if result.passed {
      continue;
    }
    if let Some(details) = &result.details {
      for line in detail_lines(details) {
        println!("   - {}", line);
      }
    }
    if let Some(suggestion) = &result.suggestion {
      println!("   💡 {}", suggestion);
    }
  }

  let (errors, warnings) = report.count_failures();
  println!();
  if errors == 0 && warnings == 0 {
    println!("All {} check(s) passed", report.results.len());
  } else {
    println!("{} error(s), {} warning(s)", errors, warnings);
  }
}

/// Flatten a details object into printable lines
fn detail_lines(details: &serde_json::Value) -> Vec<String> {
  let Some(object) = details.as_object() else {
    return vec![details.to_string()];
  };

  object
    .values()
    .filter_map(|value| value.as_array())
    .flatten()
    .map(|item| match item {
      serde_json::Value::String(s) => s.clone(),
      serde_json::Value::Object(fields) if fields.contains_key("kind") => {
        let kind = fields.get("kind").and_then(|v| v.as_str()).unwrap_or_default();
        let label = fields.get("label").and_then(|v| v.as_str()).unwrap_or_default();
        format!("{} '{}'", kind, label)
      }
      other => other.to_string(),
    })
    .collect()
}
