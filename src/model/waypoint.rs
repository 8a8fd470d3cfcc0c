//! Signals and waypoints, owned by the track they are placed on

use super::track_section::TrackSection;
use super::ToWireOn;
use crate::railjson::{self, Direction, LogicalSignal, Side, WaypointRef, WaypointType};
use serde::{Deserialize, Serialize};

/// Default sight distance of a signal, in meters
pub const DEFAULT_SIGHT_DISTANCE: f64 = 400.0;

fn default_sight_distance() -> f64 {
  DEFAULT_SIGHT_DISTANCE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
  pub label: String,
  /// Offset from the track's begin, in meters
  pub position: f64,
  #[serde(default)]
  pub direction: Direction,
  #[serde(default = "default_sight_distance")]
  pub sight_distance: f64,
  #[serde(default)]
  pub logical_signals: Vec<LogicalSignal>,
  #[serde(default)]
  pub side: Option<Side>,
  #[serde(default)]
  pub kp: Option<String>,
}

impl Signal {
  pub fn new(label: impl Into<String>, position: f64, direction: Direction) -> Self {
    Self {
      label: label.into(),
      position,
      direction,
      sight_distance: DEFAULT_SIGHT_DISTANCE,
      logical_signals: Vec::new(),
      side: None,
      kp: None,
    }
  }
}

impl ToWireOn for Signal {
  type Wire = railjson::Signal;

  fn to_wire(&self, track: &TrackSection) -> railjson::Signal {
    railjson::Signal {
      id: self.label.clone(),
      track: track.label.clone(),
      position: self.position,
      direction: self.direction,
      sight_distance: self.sight_distance,
      logical_signals: self.logical_signals.clone(),
      extensions: Some(railjson::SignalExtensions {
        sncf: Some(railjson::SignalSncfExtension {
          label: self.label.clone(),
          side: self.side,
          kp: self.kp.clone(),
        }),
      }),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferStop {
  pub label: String,
  pub position: f64,
}

impl ToWireOn for BufferStop {
  type Wire = railjson::BufferStop;

  fn to_wire(&self, track: &TrackSection) -> railjson::BufferStop {
    railjson::BufferStop {
      id: self.label.clone(),
      track: track.label.clone(),
      position: self.position,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detector {
  pub label: String,
  pub position: f64,
}

impl ToWireOn for Detector {
  type Wire = railjson::Detector;

  fn to_wire(&self, track: &TrackSection) -> railjson::Detector {
    railjson::Detector {
      id: self.label.clone(),
      track: track.label.clone(),
      position: self.position,
    }
  }
}

/// Route delimiter placed on a track
///
/// The set of kinds is closed: exporting splits waypoints into
/// `buffer_stops` and `detectors` by matching on this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Waypoint {
  BufferStop(BufferStop),
  Detector(Detector),
}

impl Waypoint {
  pub fn label(&self) -> &str {
    match self {
      Waypoint::BufferStop(bs) => &bs.label,
      Waypoint::Detector(d) => &d.label,
    }
  }

  pub fn position(&self) -> f64 {
    match self {
      Waypoint::BufferStop(bs) => bs.position,
      Waypoint::Detector(d) => d.position,
    }
  }

  pub fn waypoint_type(&self) -> WaypointType {
    match self {
      Waypoint::BufferStop(_) => WaypointType::BufferStop,
      Waypoint::Detector(_) => WaypointType::Detector,
    }
  }

  /// Typed reference, as used by route entry and exit points
  pub fn to_ref(&self) -> WaypointRef {
    WaypointRef {
      kind: self.waypoint_type(),
      id: self.label().to_string(),
    }
  }
}
