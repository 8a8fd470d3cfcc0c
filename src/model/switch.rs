//! Switches linking track ends together

use super::ToWire;
use crate::railjson::{self, Endpoint, TrackEndpoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Built-in switch types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchType {
  /// Plain junction between two track ends
  Link,
  PointSwitch,
  Crossing,
  DoubleSlipSwitch,
}

impl SwitchType {
  pub fn as_str(self) -> &'static str {
    match self {
      SwitchType::Link => "link",
      SwitchType::PointSwitch => "point_switch",
      SwitchType::Crossing => "crossing",
      SwitchType::DoubleSlipSwitch => "double_slip_switch",
    }
  }

  /// Port names a switch of this type must connect
  pub fn port_names(self) -> &'static [&'static str] {
    match self {
      SwitchType::Link => &["A", "B"],
      SwitchType::PointSwitch => &["A", "B1", "B2"],
      SwitchType::Crossing => &["A1", "A2", "B1", "B2"],
      SwitchType::DoubleSlipSwitch => &["A1", "A2", "B1", "B2"],
    }
  }

  /// Default delay to change the switch group, in seconds
  pub fn default_group_change_delay(self) -> f64 {
    match self {
      SwitchType::PointSwitch | SwitchType::DoubleSlipSwitch => 4.0,
      SwitchType::Link | SwitchType::Crossing => 0.0,
    }
  }
}

impl fmt::Display for SwitchType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
  pub label: String,
  pub switch_type: SwitchType,
  #[serde(default)]
  pub group_change_delay: Option<f64>,
  /// Port name → connected track end
  #[serde(default)]
  pub ports: BTreeMap<String, TrackEndpoint>,
}

impl Switch {
  pub fn new(label: impl Into<String>, switch_type: SwitchType) -> Self {
    Self {
      label: label.into(),
      switch_type,
      group_change_delay: None,
      ports: BTreeMap::new(),
    }
  }

  /// Connect `port` to an end of `track`
  pub fn with_port(mut self, port: impl Into<String>, track: impl Into<String>, endpoint: Endpoint) -> Self {
    self.ports.insert(
      port.into(),
      TrackEndpoint {
        endpoint,
        track: track.into(),
      },
    );
    self
  }

  pub fn group_change_delay(&self) -> f64 {
    self
      .group_change_delay
      .unwrap_or_else(|| self.switch_type.default_group_change_delay())
  }

  /// Ports required by the switch type but not connected
  pub fn missing_ports(&self) -> Vec<&'static str> {
    self
      .switch_type
      .port_names()
      .iter()
      .copied()
      .filter(|name| !self.ports.contains_key(*name))
      .collect()
  }
}

impl ToWire for Switch {
  type Wire = railjson::Switch;

  fn to_wire(&self) -> railjson::Switch {
    railjson::Switch {
      id: self.label.clone(),
      switch_type: self.switch_type.as_str().to_string(),
      group_change_delay: self.group_change_delay(),
      ports: self.ports.clone(),
    }
  }
}
