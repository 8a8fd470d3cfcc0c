//! Track sections and the objects placed along them

use super::operational_point::OperationalPointPart;
use super::waypoint::{BufferStop, Detector, Signal, Waypoint};
use super::ToWire;
use crate::railjson::{self, Curve, Direction, LineString, Slope};
use serde::{Deserialize, Serialize};

/// A linear piece of track
///
/// Owns the signals, waypoints and operational point parts located on it.
/// Their order here is their order in the exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSection {
  pub label: String,
  /// Length in meters
  pub length: f64,
  #[serde(default)]
  pub slopes: Vec<Slope>,
  #[serde(default)]
  pub curves: Vec<Curve>,
  /// Geographic polyline; a degenerate line at the origin when fewer than two points are given
  #[serde(default)]
  pub coordinates: Vec<[f64; 2]>,
  #[serde(default)]
  pub line_code: Option<i64>,
  #[serde(default)]
  pub line_name: Option<String>,
  #[serde(default)]
  pub track_number: Option<i64>,
  #[serde(default)]
  pub track_name: Option<String>,
  #[serde(default)]
  pub signals: Vec<Signal>,
  #[serde(default)]
  pub waypoints: Vec<Waypoint>,
  #[serde(default)]
  pub operational_points: Vec<OperationalPointPart>,
}

impl TrackSection {
  pub fn new(label: impl Into<String>, length: f64) -> Self {
    Self {
      label: label.into(),
      length,
      slopes: Vec::new(),
      curves: Vec::new(),
      coordinates: Vec::new(),
      line_code: None,
      line_name: None,
      track_number: None,
      track_name: None,
      signals: Vec::new(),
      waypoints: Vec::new(),
      operational_points: Vec::new(),
    }
  }

  pub fn add_buffer_stop(&mut self, label: impl Into<String>, position: f64) -> &Waypoint {
    self.push_waypoint(Waypoint::BufferStop(BufferStop {
      label: label.into(),
      position,
    }))
  }

  pub fn add_detector(&mut self, label: impl Into<String>, position: f64) -> &Waypoint {
    self.push_waypoint(Waypoint::Detector(Detector {
      label: label.into(),
      position,
    }))
  }

  pub fn add_signal(&mut self, label: impl Into<String>, position: f64, direction: Direction) -> &mut Signal {
    let index = self.signals.len();
    self.signals.push(Signal::new(label, position, direction));
    &mut self.signals[index]
  }

  fn push_waypoint(&mut self, waypoint: Waypoint) -> &Waypoint {
    let index = self.waypoints.len();
    self.waypoints.push(waypoint);
    &self.waypoints[index]
  }

  /// Whether `position` lies on this track
  pub fn contains(&self, position: f64) -> bool {
    (0.0..=self.length).contains(&position)
  }

  fn geometry(&self) -> LineString {
    if self.coordinates.len() >= 2 {
      LineString::new(self.coordinates.clone())
    } else {
      LineString::new(vec![[0.0, 0.0], [0.0, 0.0]])
    }
  }

  fn extensions(&self) -> Option<railjson::TrackSectionExtensions> {
    if self.line_code.is_none() && self.line_name.is_none() && self.track_number.is_none() && self.track_name.is_none()
    {
      return None;
    }

    Some(railjson::TrackSectionExtensions {
      sncf: Some(railjson::TrackSectionSncfExtension {
        line_code: self.line_code.unwrap_or_default(),
        line_name: self.line_name.clone().unwrap_or_default(),
        track_number: self.track_number.unwrap_or_default(),
        track_name: self.track_name.clone().unwrap_or_default(),
      }),
    })
  }
}

impl ToWire for TrackSection {
  type Wire = railjson::TrackSection;

  fn to_wire(&self) -> railjson::TrackSection {
    railjson::TrackSection {
      id: self.label.clone(),
      length: self.length,
      slopes: self.slopes.clone(),
      curves: self.curves.clone(),
      geo: self.geometry(),
      extensions: self.extensions(),
    }
  }
}
