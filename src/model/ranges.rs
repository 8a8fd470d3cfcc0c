//! Range-based objects: speed sections, electrifications, neutral sections

use super::ToWire;
use super::track_section::TrackSection;
use crate::railjson::{self, ApplicableDirections, ApplicableDirectionsTrackRange, Direction, DirectionalTrackRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn applicable_range(
  track: &TrackSection,
  begin: f64,
  end: f64,
  applicable_directions: ApplicableDirections,
) -> ApplicableDirectionsTrackRange {
  ApplicableDirectionsTrackRange {
    track: track.label.clone(),
    begin,
    end,
    applicable_directions,
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedSection {
  pub label: String,
  /// Limit for all trains, in m/s
  #[serde(default)]
  pub speed_limit: Option<f64>,
  /// Limits for trains carrying a given tag, in m/s
  #[serde(default)]
  pub speed_limit_by_tag: BTreeMap<String, f64>,
  #[serde(default)]
  pub track_ranges: Vec<ApplicableDirectionsTrackRange>,
  /// Restrict the section to trains following these routes
  #[serde(default)]
  pub on_routes: Option<Vec<String>>,
}

impl SpeedSection {
  pub fn new(label: impl Into<String>, speed_limit: Option<f64>) -> Self {
    Self {
      label: label.into(),
      speed_limit,
      speed_limit_by_tag: BTreeMap::new(),
      track_ranges: Vec::new(),
      on_routes: None,
    }
  }

  pub fn add_track_range(
    &mut self,
    track: &TrackSection,
    begin: f64,
    end: f64,
    applicable_directions: ApplicableDirections,
  ) -> &mut Self {
    self
      .track_ranges
      .push(applicable_range(track, begin, end, applicable_directions));
    self
  }
}

impl ToWire for SpeedSection {
  type Wire = railjson::SpeedSection;

  fn to_wire(&self) -> railjson::SpeedSection {
    railjson::SpeedSection {
      id: self.label.clone(),
      speed_limit: self.speed_limit,
      speed_limit_by_tag: self.speed_limit_by_tag.clone(),
      track_ranges: self.track_ranges.clone(),
      on_routes: self.on_routes.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Electrification {
  pub label: String,
  /// Catenary voltage, e.g. `"25000V"`
  pub voltage: String,
  #[serde(default)]
  pub track_ranges: Vec<ApplicableDirectionsTrackRange>,
}

impl Electrification {
  pub fn new(label: impl Into<String>, voltage: impl Into<String>) -> Self {
    Self {
      label: label.into(),
      voltage: voltage.into(),
      track_ranges: Vec::new(),
    }
  }

  /// Electrify the whole of `track`, both directions
  pub fn add_track(&mut self, track: &TrackSection) -> &mut Self {
    self
      .track_ranges
      .push(applicable_range(track, 0.0, track.length, ApplicableDirections::Both));
    self
  }
}

impl ToWire for Electrification {
  type Wire = railjson::Electrification;

  fn to_wire(&self) -> railjson::Electrification {
    railjson::Electrification {
      id: self.label.clone(),
      voltage: self.voltage.clone(),
      track_ranges: self.track_ranges.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutralSection {
  pub label: String,
  /// Whether pantographs must be lowered rather than just cutting traction
  #[serde(default)]
  pub lower_pantograph: bool,
  #[serde(default)]
  pub track_ranges: Vec<DirectionalTrackRange>,
  #[serde(default)]
  pub announcement_track_ranges: Vec<DirectionalTrackRange>,
}

impl NeutralSection {
  pub fn new(label: impl Into<String>, lower_pantograph: bool) -> Self {
    Self {
      label: label.into(),
      lower_pantograph,
      track_ranges: Vec::new(),
      announcement_track_ranges: Vec::new(),
    }
  }

  pub fn add_track_range(&mut self, track: &TrackSection, begin: f64, end: f64, direction: Direction) -> &mut Self {
    self.track_ranges.push(DirectionalTrackRange {
      track: track.label.clone(),
      begin,
      end,
      direction,
    });
    self
  }

  pub fn add_announcement_track_range(
    &mut self,
    track: &TrackSection,
    begin: f64,
    end: f64,
    direction: Direction,
  ) -> &mut Self {
    self.announcement_track_ranges.push(DirectionalTrackRange {
      track: track.label.clone(),
      begin,
      end,
      direction,
    });
    self
  }
}

impl ToWire for NeutralSection {
  type Wire = railjson::NeutralSection;

  fn to_wire(&self) -> railjson::NeutralSection {
    railjson::NeutralSection {
      id: self.label.clone(),
      lower_pantograph: self.lower_pantograph,
      track_ranges: self.track_ranges.clone(),
      announcement_track_ranges: self.announcement_track_ranges.clone(),
    }
  }
}
