//! Duplicate label detection check
//!
//! Labels become document ids, so two objects of the same pool sharing a label
//! produce an ambiguous document.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::InfraResult;

/// Report objects that repeat a label already used in their pool
pub struct DuplicateLabelsCheck;

impl Check for DuplicateLabelsCheck {
  fn name(&self) -> &'static str {
    "duplicate-labels"
  }

  fn description(&self) -> &'static str {
    "Detect objects sharing a label within the same collection"
  }

  fn run(&self, ctx: &CheckContext) -> InfraResult<CheckResult> {
    let duplicates = ctx.infra.find_duplicates();

    if duplicates.is_empty() {
      return Ok(CheckResult::pass(self.name(), "No duplicate labels"));
    }

    let objects: Vec<serde_json::Value> = duplicates
      .iter()
      .map(|object| serde_json::json!({ "kind": object.kind(), "label": object.label() }))
      .collect();

    Ok(
      CheckResult::error(self.name(), format!("Found {} duplicate label(s)", duplicates.len()))
        .with_suggestion("Rename the repeated objects so every id is unique")
        .with_details(serde_json::json!({ "duplicates": objects })),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::checks::Severity;
  use crate::model::{Infra, Switch, SwitchType, TrackSection};

  #[test]
  fn test_check_name() {
    assert_eq!(DuplicateLabelsCheck.name(), "duplicate-labels");
  }

  #[test]
  fn test_reports_repeats() {
    let mut infra = Infra::new();
    infra.add_track_section(TrackSection::new("T1", 10.0));
    infra.add_switch(Switch::new("SW1", SwitchType::Link));
    infra.add_switch(Switch::new("SW1", SwitchType::Link));

    let result = DuplicateLabelsCheck
      .run(&CheckContext {
        infra: &infra,
        thorough: false,
      })
      .unwrap();

    assert!(!result.passed);
    assert_eq!(result.severity, Severity::Error);
    let details = result.details.unwrap();
    assert_eq!(details["duplicates"][0]["kind"], "switch");
    assert_eq!(details["duplicates"][0]["label"], "SW1");
  }

  #[test]
  fn test_clean_infra_passes() {
    let mut infra = Infra::new();
    infra.add_track_section(TrackSection::new("T1", 10.0));

    let result = DuplicateLabelsCheck
      .run(&CheckContext {
        infra: &infra,
        thorough: false,
      })
      .unwrap();
    assert!(result.passed);
  }
}
