//! Position bounds check
//!
//! Positions are offsets from the start of the owning track, so they must lie
//! in `[0, length]`. Ranges must also be ordered.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::InfraResult;
use crate::model::{Infra, TrackSection};

pub struct PositionsInRangeCheck;

fn out_of_track(track: &TrackSection, kind: &str, label: &str, position: f64) -> Option<String> {
  if track.contains(position) {
    None
  } else {
    Some(format!(
      "{} '{}' at {} is outside track '{}' (length {})",
      kind, label, position, track.label, track.length
    ))
  }
}

fn bad_range(infra: &Infra, holder: &str, track: &str, begin: f64, end: f64) -> Option<String> {
  // unknown tracks are reported by dangling-references
  let track = infra.track_section(track)?;
  if begin > end {
    Some(format!("{}: range [{}, {}] on '{}' is reversed", holder, begin, end, track.label))
  } else if !track.contains(begin) || !track.contains(end) {
    Some(format!(
      "{}: range [{}, {}] exceeds track '{}' (length {})",
      holder, begin, end, track.label, track.length
    ))
  } else {
    None
  }
}

fn find_out_of_range(infra: &Infra) -> Vec<String> {
  let mut problems = Vec::new();

  for track in &infra.track_sections {
    for signal in &track.signals {
      problems.extend(out_of_track(track, "signal", &signal.label, signal.position));
    }
    for waypoint in &track.waypoints {
      let kind = match waypoint.waypoint_type() {
        crate::railjson::WaypointType::BufferStop => "buffer stop",
        crate::railjson::WaypointType::Detector => "detector",
      };
      problems.extend(out_of_track(track, kind, waypoint.label(), waypoint.position()));
    }
    for part in &track.operational_points {
      problems.extend(out_of_track(
        track,
        "part of operational point",
        &part.operational_point,
        part.position,
      ));
    }
  }

  for section in &infra.speed_sections {
    let holder = format!("speed section '{}'", section.label);
    for range in &section.track_ranges {
      problems.extend(bad_range(infra, &holder, &range.track, range.begin, range.end));
    }
  }

  for electrification in &infra.electrifications {
    let holder = format!("electrification '{}'", electrification.label);
    for range in &electrification.track_ranges {
      problems.extend(bad_range(infra, &holder, &range.track, range.begin, range.end));
    }
  }

  for section in &infra.neutral_sections {
    let holder = format!("neutral section '{}'", section.label);
    for range in section.track_ranges.iter().chain(&section.announcement_track_ranges) {
      problems.extend(bad_range(infra, &holder, &range.track, range.begin, range.end));
    }
  }

  problems
}

impl Check for PositionsInRangeCheck {
  fn name(&self) -> &'static str {
    "positions-in-range"
  }

  fn description(&self) -> &'static str {
    "Verify that positions and ranges lie within their track sections"
  }

  fn run(&self, ctx: &CheckContext) -> InfraResult<CheckResult> {
    let problems = find_out_of_range(ctx.infra);

    if problems.is_empty() {
      return Ok(CheckResult::pass(self.name(), "All positions lie on their tracks"));
    }

    Ok(
      CheckResult::error(self.name(), format!("Found {} position(s) outside their track", problems.len()))
        .with_suggestion("Positions are offsets from the track start and must not exceed its length")
        .with_details(serde_json::json!({ "positions": problems })),
    )
  }
}
