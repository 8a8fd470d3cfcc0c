//! Check trait for infrastructure validation
//!
//! Every check is a read-only pass over an [`Infra`]. Checks never modify the
//! model and never abort the export themselves; they return a [`CheckResult`]
//! and the caller decides what a failure means.

use crate::core::error::InfraResult;
use crate::model::Infra;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a failed check is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  /// Nothing to report
  Info,
  /// Exported anyway unless warnings are failures
  Warning,
  /// Blocks the export
  Error,
}

impl Severity {
  pub fn as_str(self) -> &'static str {
    match self {
      Severity::Info => "info",
      Severity::Warning => "warning",
      Severity::Error => "error",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Outcome of one check over one infrastructure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
  pub check_name: String,
  pub passed: bool,
  /// `Info` when passed
  pub severity: Severity,
  pub message: String,
  /// How to fix a failure
  #[serde(skip_serializing_if = "Option::is_none")]
  pub suggestion: Option<String>,
  /// Offending objects, as JSON
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}

impl CheckResult {
  fn new(check_name: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
    Self {
      check_name: check_name.into(),
      passed: severity == Severity::Info,
      severity,
      message: message.into(),
      suggestion: None,
      details: None,
    }
  }

  pub fn pass(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self::new(check_name, Severity::Info, message)
  }

  pub fn error(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self::new(check_name, Severity::Error, message)
  }

  pub fn warning(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self::new(check_name, Severity::Warning, message)
  }

  pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
    self.suggestion = Some(suggestion.into());
    self
  }

  pub fn with_details(mut self, details: serde_json::Value) -> Self {
    self.details = Some(details);
    self
  }

  /// Whether this result blocks an export; `strict` makes warnings blocking
  pub fn is_blocking(&self, strict: bool) -> bool {
    match self.severity {
      Severity::Error => true,
      Severity::Warning => strict,
      Severity::Info => false,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
  pub infra: &'a Infra,
  /// Also run checks flagged expensive
  pub thorough: bool,
}

/// A named validation pass over an infrastructure
///
/// ```rust,ignore
/// struct NoEmptyTracks;
///
/// impl Check for NoEmptyTracks {
///   fn name(&self) -> &str {
///     "no-empty-tracks"
///   }
///
///   fn description(&self) -> &str {
///     "Track sections must have a positive length"
///   }
///
///   fn run(&self, ctx: &CheckContext) -> InfraResult<CheckResult> {
///     if ctx.infra.track_sections.iter().all(|t| t.length > 0.0) {
///       Ok(CheckResult::pass(self.name(), "All tracks have a length"))
///     } else {
///       Ok(CheckResult::error(self.name(), "Empty track found").with_suggestion("Set a length"))
///     }
///   }
/// }
/// ```
pub trait Check: Send + Sync {
  /// Kebab-case id, also used by `validation.disabled_checks`
  fn name(&self) -> &str;

  fn description(&self) -> &str;

  /// `Err` means the check could not run, not that the infrastructure is invalid
  fn run(&self, ctx: &CheckContext) -> InfraResult<CheckResult>;

  /// Skipped unless the run is thorough
  fn is_expensive(&self) -> bool {
    false
  }
}
