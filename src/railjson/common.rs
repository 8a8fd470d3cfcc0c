//! Shared RailJson building blocks: directions, track ranges, endpoints, geometry

use serde::{Deserialize, Serialize};

/// Direction of travel along a track section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
  #[default]
  StartToStop,
  StopToStart,
}

/// Directions a track range applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicableDirections {
  StartToStop,
  StopToStart,
  #[default]
  Both,
}

/// Either end of a track section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Endpoint {
  Begin,
  End,
}

/// Side of the track a signal is installed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
  Left,
  Right,
  Center,
}

/// A track end, as referenced by switch ports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEndpoint {
  pub endpoint: Endpoint,
  pub track: String,
}

/// Kinds of waypoints a route may start or end on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointType {
  BufferStop,
  Detector,
}

/// Typed reference to a waypoint (`{"type": "Detector", "id": "D1"}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointRef {
  #[serde(rename = "type")]
  pub kind: WaypointType,
  pub id: String,
}

/// A stretch of track applying to one or both directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicableDirectionsTrackRange {
  pub track: String,
  pub begin: f64,
  pub end: f64,
  pub applicable_directions: ApplicableDirections,
}

/// A stretch of track applying to a single direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalTrackRange {
  pub track: String,
  pub begin: f64,
  pub end: f64,
  pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeometryType {
  #[default]
  LineString,
}

/// GeoJSON line string (`[longitude, latitude]` pairs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
  #[serde(rename = "type")]
  pub kind: GeometryType,
  pub coordinates: Vec<[f64; 2]>,
}

impl LineString {
  pub fn new(coordinates: Vec<[f64; 2]>) -> Self {
    Self {
      kind: GeometryType::LineString,
      coordinates,
    }
  }
}

/// Gradient over a stretch of track, in ‰
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slope {
  pub begin: f64,
  pub end: f64,
  pub gradient: f64,
}

/// Curve radius over a stretch of track, in meters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
  pub begin: f64,
  pub end: f64,
  pub radius: f64,
}
