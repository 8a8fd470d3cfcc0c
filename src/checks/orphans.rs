//! Orphan operational point parts
//!
//! A part naming an operational point that was never declared is silently
//! dropped from the document. This check makes the drop visible.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::InfraResult;

pub struct OrphanPartsCheck;

impl Check for OrphanPartsCheck {
  fn name(&self) -> &'static str {
    "orphan-operational-point-parts"
  }

  fn description(&self) -> &'static str {
    "Find operational point parts whose operational point is not declared"
  }

  fn run(&self, ctx: &CheckContext) -> InfraResult<CheckResult> {
    let orphans = ctx.infra.orphan_parts();

    if orphans.is_empty() {
      return Ok(CheckResult::pass(self.name(), "Every operational point part has an owner"));
    }

    let parts: Vec<serde_json::Value> = orphans
      .iter()
      .map(|(track, part)| {
        serde_json::json!({
          "track": track.label,
          "operational_point": part.operational_point,
          "position": part.position,
        })
      })
      .collect();

    Ok(
      CheckResult::warning(self.name(), format!("{} operational point part(s) will be dropped", orphans.len()))
        .with_suggestion("Declare the missing operational points or remove the parts")
        .with_details(serde_json::json!({ "parts": parts })),
    )
  }
}
