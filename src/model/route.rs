//! Routes between two waypoints

use super::ToWire;
use super::waypoint::Waypoint;
use crate::railjson::{self, Direction, WaypointRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
  pub label: String,
  pub entry_point: WaypointRef,
  pub exit_point: WaypointRef,
  #[serde(default)]
  pub entry_point_direction: Direction,
  /// Switch label → group the switch must be set to
  #[serde(default)]
  pub switches_directions: BTreeMap<String, String>,
  /// Detectors releasing the route once cleared, in travel order
  #[serde(default)]
  pub release_detectors: Vec<String>,
}

impl Route {
  pub fn new(
    label: impl Into<String>,
    entry_point: &Waypoint,
    exit_point: &Waypoint,
    entry_point_direction: Direction,
  ) -> Self {
    Self {
      label: label.into(),
      entry_point: entry_point.to_ref(),
      exit_point: exit_point.to_ref(),
      entry_point_direction,
      switches_directions: BTreeMap::new(),
      release_detectors: Vec::new(),
    }
  }

  pub fn with_switch(mut self, switch: impl Into<String>, group: impl Into<String>) -> Self {
    self.switches_directions.insert(switch.into(), group.into());
    self
  }

  pub fn with_release_detector(mut self, detector: impl Into<String>) -> Self {
    self.release_detectors.push(detector.into());
    self
  }
}

impl ToWire for Route {
  type Wire = railjson::Route;

  fn to_wire(&self) -> railjson::Route {
    railjson::Route {
      id: self.label.clone(),
      entry_point: self.entry_point.clone(),
      exit_point: self.exit_point.clone(),
      entry_point_direction: self.entry_point_direction,
      switches_directions: self.switches_directions.clone(),
      release_detectors: self.release_detectors.clone(),
    }
  }
}
