//! RailJson infrastructure objects
//!
//! Field order matches the published schema and is the serialization order.
//! Optional fields are skipped when unset instead of being written as `null`.

use super::common::{
  ApplicableDirectionsTrackRange, Curve, Direction, DirectionalTrackRange, LineString, Side, Slope, TrackEndpoint,
  WaypointRef,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSection {
  pub id: String,
  pub length: f64,
  pub slopes: Vec<Slope>,
  pub curves: Vec<Curve>,
  pub geo: LineString,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub extensions: Option<TrackSectionExtensions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSectionExtensions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sncf: Option<TrackSectionSncfExtension>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSectionSncfExtension {
  pub line_code: i64,
  pub line_name: String,
  pub track_number: i64,
  pub track_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
  pub id: String,
  pub switch_type: String,
  pub group_change_delay: f64,
  pub ports: BTreeMap<String, TrackEndpoint>,
}

/// Switch type definition beyond the built-in ones
///
/// Never produced by the generator; present so that documents carrying
/// custom switch types can still be read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedSwitchType {
  pub id: String,
  pub ports: Vec<String>,
  pub groups: BTreeMap<String, Vec<SwitchPortConnection>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchPortConnection {
  pub src: String,
  pub dst: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
  pub id: String,
  pub entry_point: WaypointRef,
  pub exit_point: WaypointRef,
  pub entry_point_direction: Direction,
  pub switches_directions: BTreeMap<String, String>,
  pub release_detectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
  pub id: String,
  pub track: String,
  pub position: f64,
  pub direction: Direction,
  pub sight_distance: f64,
  pub logical_signals: Vec<LogicalSignal>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub extensions: Option<SignalExtensions>,
}

/// One signaling system hosted by a physical signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalSignal {
  pub signaling_system: String,
  pub next_signaling_systems: Vec<String>,
  pub settings: BTreeMap<String, String>,
  pub default_parameters: BTreeMap<String, String>,
  pub conditional_parameters: Vec<ConditionalParameters>,
}

/// Signal parameters overridden when the signal is entered through a given route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalParameters {
  pub on_route: String,
  pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalExtensions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sncf: Option<SignalSncfExtension>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSncfExtension {
  pub label: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub side: Option<Side>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferStop {
  pub id: String,
  pub track: String,
  pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detector {
  pub id: String,
  pub track: String,
  pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPoint {
  pub id: String,
  pub parts: Vec<OperationalPointPart>,
  pub name: String,
  pub extensions: OperationalPointExtensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPointPart {
  pub track: String,
  pub position: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub extensions: Option<OperationalPointPartExtensions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPointPartExtensions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sncf: Option<OperationalPointPartSncfExtension>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPointPartSncfExtension {
  pub kp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPointExtensions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sncf: Option<OperationalPointSncfExtension>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub identifier: Option<OperationalPointIdentifierExtension>,
}

/// SNCF reference data for an operational point
///
/// Only `trigram` is modeled; `ci`, `ch`, `ch_short_label` and
/// `ch_long_label` are filled with fixed placeholders by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPointSncfExtension {
  pub ci: i64,
  pub ch: String,
  pub ch_short_label: String,
  pub ch_long_label: String,
  pub trigram: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPointIdentifierExtension {
  pub uic: i64,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedSection {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub speed_limit: Option<f64>,
  pub speed_limit_by_tag: BTreeMap<String, f64>,
  pub track_ranges: Vec<ApplicableDirectionsTrackRange>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub on_routes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Electrification {
  pub id: String,
  pub voltage: String,
  pub track_ranges: Vec<ApplicableDirectionsTrackRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutralSection {
  pub id: String,
  pub lower_pantograph: bool,
  pub track_ranges: Vec<DirectionalTrackRange>,
  pub announcement_track_ranges: Vec<DirectionalTrackRange>,
}
