//! The infrastructure aggregate and its conversion to RailJson
//!
//! `Infra` owns every top-level collection. Signals, waypoints and operational
//! point parts live inside their track sections and are flattened into the
//! document's top-level collections at export time.
//!
//! Conversion and duplicate detection only read the aggregate. Callers must
//! not mutate it while either is running; nothing here locks.

use super::operational_point::{OperationalPoint, OperationalPointPart};
use super::ranges::{Electrification, NeutralSection, SpeedSection};
use super::route::Route;
use super::switch::Switch;
use super::track_section::TrackSection;
use super::waypoint::{Signal, Waypoint};
use super::{ToWire, ToWireOn};
use crate::railjson::{self, RAILJSON_VERSION, RailJsonInfra};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infra {
  pub track_sections: Vec<TrackSection>,
  pub switches: Vec<Switch>,
  pub operational_points: Vec<OperationalPoint>,
  pub routes: Vec<Route>,
  pub speed_sections: Vec<SpeedSection>,
  pub electrifications: Vec<Electrification>,
  pub neutral_sections: Vec<NeutralSection>,
}

impl Infra {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_track_section(&mut self, track: TrackSection) -> &mut TrackSection {
    let index = self.track_sections.len();
    self.track_sections.push(track);
    &mut self.track_sections[index]
  }

  pub fn add_switch(&mut self, switch: Switch) -> &Switch {
    let index = self.switches.len();
    self.switches.push(switch);
    &self.switches[index]
  }

  pub fn add_operational_point(&mut self, op: OperationalPoint) -> &OperationalPoint {
    let index = self.operational_points.len();
    self.operational_points.push(op);
    &self.operational_points[index]
  }

  pub fn add_route(&mut self, route: Route) -> &Route {
    let index = self.routes.len();
    self.routes.push(route);
    &self.routes[index]
  }

  pub fn add_speed_section(&mut self, section: SpeedSection) -> &SpeedSection {
    let index = self.speed_sections.len();
    self.speed_sections.push(section);
    &self.speed_sections[index]
  }

  pub fn add_electrification(&mut self, electrification: Electrification) -> &Electrification {
    let index = self.electrifications.len();
    self.electrifications.push(electrification);
    &self.electrifications[index]
  }

  pub fn add_neutral_section(&mut self, section: NeutralSection) -> &NeutralSection {
    let index = self.neutral_sections.len();
    self.neutral_sections.push(section);
    &self.neutral_sections[index]
  }

  pub fn track_section(&self, label: &str) -> Option<&TrackSection> {
    self.track_sections.iter().find(|t| t.label == label)
  }

  pub fn track_section_mut(&mut self, label: &str) -> Option<&mut TrackSection> {
    self.track_sections.iter_mut().find(|t| t.label == label)
  }

  /// Every waypoint with its owning track, tracks in order
  pub fn waypoints(&self) -> impl Iterator<Item = (&TrackSection, &Waypoint)> + '_ {
    self
      .track_sections
      .iter()
      .flat_map(|track| track.waypoints.iter().map(move |waypoint| (track, waypoint)))
  }

  /// Operational point parts whose owner is not declared
  pub fn orphan_parts(&self) -> Vec<(&TrackSection, &OperationalPointPart)> {
    let declared: HashSet<&str> = self.operational_points.iter().map(|op| op.label.as_str()).collect();

    self
      .track_sections
      .iter()
      .flat_map(|track| track.operational_points.iter().map(move |part| (track, part)))
      .filter(|(_, part)| !declared.contains(part.operational_point.as_str()))
      .collect()
  }

  /// Convert the whole aggregate into one RailJson document
  pub fn to_wire(&self) -> RailJsonInfra {
    let document = RailJsonInfra {
      version: RAILJSON_VERSION.to_string(),
      track_sections: self.track_sections.iter().map(ToWire::to_wire).collect(),
      switches: self.switches.iter().map(ToWire::to_wire).collect(),
      routes: self.routes.iter().map(ToWire::to_wire).collect(),
      signals: self.signals().collect(),
      buffer_stops: self.buffer_stops().collect(),
      detectors: self.detectors().collect(),
      operational_points: self.make_operational_points(),
      extended_switch_types: Vec::new(),
      speed_sections: self.speed_sections.iter().map(ToWire::to_wire).collect(),
      electrifications: self.electrifications.iter().map(ToWire::to_wire).collect(),
      neutral_sections: self.neutral_sections.iter().map(ToWire::to_wire).collect(),
    };

    tracing::debug!(
      version = %document.version,
      track_sections = document.track_sections.len(),
      signals = document.signals.len(),
      buffer_stops = document.buffer_stops.len(),
      detectors = document.detectors.len(),
      operational_points = document.operational_points.len(),
      "converted infrastructure"
    );

    document
  }

  /// Signals of every track, tracks in order then signals in track order
  pub fn signals(&self) -> impl Iterator<Item = railjson::Signal> + '_ {
    self
      .track_sections
      .iter()
      .flat_map(|track| track.signals.iter().map(move |signal| signal.to_wire(track)))
  }

  pub fn buffer_stops(&self) -> impl Iterator<Item = railjson::BufferStop> + '_ {
    self.waypoints().filter_map(|(track, waypoint)| match waypoint {
      Waypoint::BufferStop(buffer_stop) => Some(buffer_stop.to_wire(track)),
      Waypoint::Detector(_) => None,
    })
  }

  pub fn detectors(&self) -> impl Iterator<Item = railjson::Detector> + '_ {
    self.waypoints().filter_map(|(track, waypoint)| match waypoint {
      Waypoint::Detector(detector) => Some(detector.to_wire(track)),
      Waypoint::BufferStop(_) => None,
    })
  }

  /// One wire operational point per declared operational point
  ///
  /// Parts are gathered from all tracks (in track order) by owner label.
  /// A declared point without parts gets an empty list; parts naming an
  /// undeclared point are dropped.
  pub fn make_operational_points(&self) -> Vec<railjson::OperationalPoint> {
    let mut parts_per_op: HashMap<&str, Vec<railjson::OperationalPointPart>> = HashMap::new();
    for track in &self.track_sections {
      for part in &track.operational_points {
        parts_per_op
          .entry(part.operational_point.as_str())
          .or_default()
          .push(part.to_wire(track));
      }
    }

    let ops: Vec<railjson::OperationalPoint> = self
      .operational_points
      .iter()
      .map(|op| op.to_wire(parts_per_op.get(op.label.as_str()).cloned().unwrap_or_default()))
      .collect();

    for (track, part) in self.orphan_parts() {
      tracing::debug!(
        track = %track.label,
        operational_point = %part.operational_point,
        "dropping part of undeclared operational point"
      );
    }

    ops
  }

  /// Numeric fields holding `inf` or `NaN`, as "<holder>: <field> is <value>" lines
  ///
  /// JSON has no spelling for these, so they would be written as `null`.
  pub fn non_finite_values(&self) -> Vec<String> {
    let mut problems = Vec::new();
    let mut flag = |holder: &str, field: &str, value: f64| {
      if !value.is_finite() {
        problems.push(format!("{}: {} is {}", holder, field, value));
      }
    };

    for track in &self.track_sections {
      let holder = format!("track section '{}'", track.label);
      flag(&holder, "length", track.length);
      for slope in &track.slopes {
        flag(&holder, "slope begin", slope.begin);
        flag(&holder, "slope end", slope.end);
        flag(&holder, "slope gradient", slope.gradient);
      }
      for curve in &track.curves {
        flag(&holder, "curve begin", curve.begin);
        flag(&holder, "curve end", curve.end);
        flag(&holder, "curve radius", curve.radius);
      }
      for [x, y] in &track.coordinates {
        flag(&holder, "coordinate", *x);
        flag(&holder, "coordinate", *y);
      }
      for signal in &track.signals {
        let holder = format!("signal '{}'", signal.label);
        flag(&holder, "position", signal.position);
        flag(&holder, "sight distance", signal.sight_distance);
      }
      for waypoint in &track.waypoints {
        flag(&format!("waypoint '{}'", waypoint.label()), "position", waypoint.position());
      }
      for part in &track.operational_points {
        let holder = format!("part of operational point '{}' on '{}'", part.operational_point, track.label);
        flag(&holder, "position", part.position);
      }
    }

    for switch in &self.switches {
      if let Some(delay) = switch.group_change_delay {
        flag(&format!("switch '{}'", switch.label), "group change delay", delay);
      }
    }

    for section in &self.speed_sections {
      let holder = format!("speed section '{}'", section.label);
      if let Some(limit) = section.speed_limit {
        flag(&holder, "speed limit", limit);
      }
      for (tag, limit) in &section.speed_limit_by_tag {
        flag(&holder, &format!("speed limit for '{}'", tag), *limit);
      }
      for range in &section.track_ranges {
        flag(&holder, "range begin", range.begin);
        flag(&holder, "range end", range.end);
      }
    }

    for electrification in &self.electrifications {
      let holder = format!("electrification '{}'", electrification.label);
      for range in &electrification.track_ranges {
        flag(&holder, "range begin", range.begin);
        flag(&holder, "range end", range.end);
      }
    }

    for section in &self.neutral_sections {
      let holder = format!("neutral section '{}'", section.label);
      for range in section.track_ranges.iter().chain(&section.announcement_track_ranges) {
        flag(&holder, "range begin", range.begin);
        flag(&holder, "range end", range.end);
      }
    }

    problems
  }

  /// Objects whose label repeats an earlier one in the same pool
  ///
  /// Pools, in scan order: track sections, switches, operational points,
  /// routes, speed sections, signals of all tracks, waypoints of all tracks.
  /// The first occurrence of a label is never reported.
  pub fn find_duplicates(&self) -> Vec<InfraObject<'_>> {
    let mut duplicates = Vec::new();

    collect_duplicates(self.track_sections.iter().map(InfraObject::TrackSection), &mut duplicates);
    collect_duplicates(self.switches.iter().map(InfraObject::Switch), &mut duplicates);
    collect_duplicates(
      self.operational_points.iter().map(InfraObject::OperationalPoint),
      &mut duplicates,
    );
    collect_duplicates(self.routes.iter().map(InfraObject::Route), &mut duplicates);
    collect_duplicates(self.speed_sections.iter().map(InfraObject::SpeedSection), &mut duplicates);
    collect_duplicates(
      self
        .track_sections
        .iter()
        .flat_map(|track| track.signals.iter().map(InfraObject::Signal)),
      &mut duplicates,
    );
    collect_duplicates(
      self.waypoints().map(|(_, waypoint)| InfraObject::Waypoint(waypoint)),
      &mut duplicates,
    );

    duplicates
  }
}

fn collect_duplicates<'a>(objects: impl Iterator<Item = InfraObject<'a>>, duplicates: &mut Vec<InfraObject<'a>>) {
  let mut seen_labels = HashSet::new();
  for object in objects {
    if !seen_labels.insert(object.label()) {
      duplicates.push(object);
    }
  }
}

/// Borrowed reference to any labeled object of an [`Infra`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InfraObject<'a> {
  TrackSection(&'a TrackSection),
  Switch(&'a Switch),
  OperationalPoint(&'a OperationalPoint),
  Route(&'a Route),
  SpeedSection(&'a SpeedSection),
  Signal(&'a Signal),
  Waypoint(&'a Waypoint),
}

impl<'a> InfraObject<'a> {
  pub fn label(&self) -> &'a str {
    match self {
      InfraObject::TrackSection(t) => &t.label,
      InfraObject::Switch(s) => &s.label,
      InfraObject::OperationalPoint(op) => &op.label,
      InfraObject::Route(r) => &r.label,
      InfraObject::SpeedSection(s) => &s.label,
      InfraObject::Signal(s) => &s.label,
      InfraObject::Waypoint(w) => w.label(),
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      InfraObject::TrackSection(_) => "track_section",
      InfraObject::Switch(_) => "switch",
      InfraObject::OperationalPoint(_) => "operational_point",
      InfraObject::Route(_) => "route",
      InfraObject::SpeedSection(_) => "speed_section",
      InfraObject::Signal(_) => "signal",
      InfraObject::Waypoint(Waypoint::BufferStop(_)) => "buffer_stop",
      InfraObject::Waypoint(Waypoint::Detector(_)) => "detector",
    }
  }
}

impl fmt::Display for InfraObject<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} '{}'", self.kind(), self.label())
  }
}
