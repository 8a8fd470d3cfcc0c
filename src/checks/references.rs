//! Dangling reference detection
//!
//! Switch ports, track ranges and routes refer to other objects by label.
//! Nothing in the model enforces that those labels resolve.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::InfraResult;
use crate::model::Infra;
use crate::railjson::{WaypointRef, WaypointType};
use std::collections::HashSet;

pub struct DanglingReferencesCheck;

/// Label sets of every referenceable pool
struct Known<'a> {
  tracks: HashSet<&'a str>,
  switches: HashSet<&'a str>,
  routes: HashSet<&'a str>,
  buffer_stops: HashSet<&'a str>,
  detectors: HashSet<&'a str>,
}

impl<'a> Known<'a> {
  fn of(infra: &'a Infra) -> Self {
    let mut buffer_stops = HashSet::new();
    let mut detectors = HashSet::new();
    for (_, waypoint) in infra.waypoints() {
      match waypoint.waypoint_type() {
        WaypointType::BufferStop => buffer_stops.insert(waypoint.label()),
        WaypointType::Detector => detectors.insert(waypoint.label()),
      };
    }

    Self {
      tracks: infra.track_sections.iter().map(|t| t.label.as_str()).collect(),
      switches: infra.switches.iter().map(|s| s.label.as_str()).collect(),
      routes: infra.routes.iter().map(|r| r.label.as_str()).collect(),
      buffer_stops,
      detectors,
    }
  }

  fn has_waypoint(&self, waypoint: &WaypointRef) -> bool {
    match waypoint.kind {
      WaypointType::BufferStop => self.buffer_stops.contains(waypoint.id.as_str()),
      WaypointType::Detector => self.detectors.contains(waypoint.id.as_str()),
    }
  }
}

fn waypoint_kind(kind: WaypointType) -> &'static str {
  match kind {
    WaypointType::BufferStop => "buffer stop",
    WaypointType::Detector => "detector",
  }
}

/// Every unresolved reference, as "<holder>: <problem>" lines
fn find_dangling(infra: &Infra) -> Vec<String> {
  let known = Known::of(infra);
  let mut problems = Vec::new();

  for switch in &infra.switches {
    for (port, endpoint) in &switch.ports {
      if !known.tracks.contains(endpoint.track.as_str()) {
        problems.push(format!(
          "switch '{}': port {} uses unknown track '{}'",
          switch.label, port, endpoint.track
        ));
      }
    }
    for port in switch.missing_ports() {
      problems.push(format!(
        "switch '{}': {} port {} is not connected",
        switch.label, switch.switch_type, port
      ));
    }
  }

  for route in &infra.routes {
    for (role, waypoint) in [("entry", &route.entry_point), ("exit", &route.exit_point)] {
      if !known.has_waypoint(waypoint) {
        problems.push(format!(
          "route '{}': {} point is unknown {} '{}'",
          route.label,
          role,
          waypoint_kind(waypoint.kind),
          waypoint.id
        ));
      }
    }
    for switch in route.switches_directions.keys() {
      if !known.switches.contains(switch.as_str()) {
        problems.push(format!("route '{}': unknown switch '{}'", route.label, switch));
      }
    }
    for detector in &route.release_detectors {
      if !known.detectors.contains(detector.as_str()) {
        problems.push(format!("route '{}': unknown release detector '{}'", route.label, detector));
      }
    }
  }

  for section in &infra.speed_sections {
    for range in &section.track_ranges {
      if !known.tracks.contains(range.track.as_str()) {
        problems.push(format!("speed section '{}': unknown track '{}'", section.label, range.track));
      }
    }
    for route in section.on_routes.iter().flatten() {
      if !known.routes.contains(route.as_str()) {
        problems.push(format!("speed section '{}': unknown route '{}'", section.label, route));
      }
    }
  }

  for electrification in &infra.electrifications {
    for range in &electrification.track_ranges {
      if !known.tracks.contains(range.track.as_str()) {
        problems.push(format!(
          "electrification '{}': unknown track '{}'",
          electrification.label, range.track
        ));
      }
    }
  }

  for section in &infra.neutral_sections {
    let ranges = section.track_ranges.iter().chain(&section.announcement_track_ranges);
    for range in ranges {
      if !known.tracks.contains(range.track.as_str()) {
        problems.push(format!("neutral section '{}': unknown track '{}'", section.label, range.track));
      }
    }
  }

  problems
}

impl Check for DanglingReferencesCheck {
  fn name(&self) -> &'static str {
    "dangling-references"
  }

  fn description(&self) -> &'static str {
    "Verify that switches, routes and ranges only reference existing objects"
  }

  fn run(&self, ctx: &CheckContext) -> InfraResult<CheckResult> {
    let problems = find_dangling(ctx.infra);

    if problems.is_empty() {
      return Ok(CheckResult::pass(self.name(), "All references resolve"));
    }

    Ok(
      CheckResult::error(self.name(), format!("Found {} dangling reference(s)", problems.len()))
        .with_suggestion("Declare the referenced objects or fix the labels")
        .with_details(serde_json::json!({ "references": problems })),
    )
  }
}
