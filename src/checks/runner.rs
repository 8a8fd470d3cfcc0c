//! Ordered registry of checks and the report of one pass over an infrastructure

use super::trait_def::{Check, CheckContext, CheckResult, Severity};
use crate::core::error::InfraResult;
use serde::Serialize;
use std::sync::Arc;

#[derive(Default)]
pub struct CheckRunner {
  checks: Vec<Arc<dyn Check>>,
}

impl CheckRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a check; results come back in registration order
  pub fn add_check(&mut self, check: Arc<dyn Check>) {
    self.checks.push(check);
  }

  /// Drop the checks named in `names` (unknown names are ignored)
  pub fn disable(&mut self, names: &[String]) {
    self.checks.retain(|check| !names.iter().any(|n| n == check.name()));
  }

  /// Run every registered check. Expensive ones only run when `ctx.thorough` is set.
  pub fn run_all(&self, ctx: &CheckContext) -> CheckReport {
    let results = self
      .checks
      .iter()
      .filter(|check| {
        let skip = check.is_expensive() && !ctx.thorough;
        if skip {
          tracing::debug!(check = check.name(), "skipping expensive check");
        }
        !skip
      })
      .map(|check| {
        check.run(ctx).unwrap_or_else(|err| {
          CheckResult::error(check.name(), format!("Check failed to run: {}", err))
            .with_suggestion("Run with -v for more details")
        })
      })
      .collect();

    CheckReport { results }
  }

  pub fn checks(&self) -> &[Arc<dyn Check>] {
    &self.checks
  }
}

/// Runner holding every built-in check, cheapest first
pub fn create_default_runner() -> CheckRunner {
  let mut runner = CheckRunner::new();
  let builtin: [Arc<dyn Check>; 5] = [
    Arc::new(super::duplicates::DuplicateLabelsCheck),
    Arc::new(super::orphans::OrphanPartsCheck),
    Arc::new(super::references::DanglingReferencesCheck),
    Arc::new(super::positions::PositionsInRangeCheck),
    Arc::new(super::connectivity::TrackConnectivityCheck),
  ];
  for check in builtin {
    runner.add_check(check);
  }
  runner
}

/// Results of one runner pass
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
  pub results: Vec<CheckResult>,
}

impl CheckReport {
  /// Whether nothing blocks an export; `strict` makes warnings blocking
  pub fn passed(&self, strict: bool) -> bool {
    !self.results.iter().any(|r| r.is_blocking(strict))
  }

  /// Names of the checks that block an export
  pub fn blocking(&self, strict: bool) -> Vec<String> {
    self
      .results
      .iter()
      .filter(|r| r.is_blocking(strict))
      .map(|r| r.check_name.clone())
      .collect()
  }

  /// Count failed results by severity: (errors, warnings)
  pub fn count_failures(&self) -> (usize, usize) {
    let failed = self.results.iter().filter(|r| !r.passed);
    failed.fold((0, 0), |(errors, warnings), r| match r.severity {
      Severity::Error => (errors + 1, warnings),
      Severity::Warning => (errors, warnings + 1),
      Severity::Info => (errors, warnings),
    })
  }

  pub fn to_json(&self) -> InfraResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}
