//! Operational points (stations, junctions) and their per-track parts

use super::track_section::TrackSection;
use super::ToWireOn;
use crate::railjson;
use serde::{Deserialize, Serialize};

// Fields of the SNCF extension the model does not carry
const PLACEHOLDER_CI: i64 = 0;
const PLACEHOLDER_CH: &str = "BV";
const PLACEHOLDER_CH_SHORT_LABEL: &str = "BV";
const PLACEHOLDER_CH_LONG_LABEL: &str = "0";

/// A logical point of the network, possibly spanning several tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPoint {
  pub label: String,
  #[serde(default)]
  pub trigram: String,
  #[serde(default)]
  pub uic: i64,
}

impl OperationalPoint {
  pub fn new(label: impl Into<String>, trigram: impl Into<String>, uic: i64) -> Self {
    Self {
      label: label.into(),
      trigram: trigram.into(),
      uic,
    }
  }

  /// Place a part of this operational point on `track`
  ///
  /// The part only remembers this point's label.
  pub fn add_part<'t>(&self, track: &'t mut TrackSection, position: f64) -> &'t mut OperationalPointPart {
    let index = track.operational_points.len();
    track.operational_points.push(OperationalPointPart {
      operational_point: self.label.clone(),
      position,
      kp: None,
    });
    &mut track.operational_points[index]
  }

  /// Render with the parts gathered from every track
  pub fn to_wire(&self, parts: Vec<railjson::OperationalPointPart>) -> railjson::OperationalPoint {
    railjson::OperationalPoint {
      id: self.label.clone(),
      parts,
      name: self.label.clone(),
      extensions: railjson::OperationalPointExtensions {
        sncf: Some(railjson::OperationalPointSncfExtension {
          ci: PLACEHOLDER_CI,
          ch: PLACEHOLDER_CH.to_string(),
          ch_short_label: PLACEHOLDER_CH_SHORT_LABEL.to_string(),
          ch_long_label: PLACEHOLDER_CH_LONG_LABEL.to_string(),
          trigram: self.trigram.clone(),
        }),
        identifier: Some(railjson::OperationalPointIdentifierExtension {
          uic: self.uic,
          name: self.label.clone(),
        }),
      },
    }
  }
}

/// Location of an operational point on one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPointPart {
  /// Label of the owning [`OperationalPoint`]
  pub operational_point: String,
  pub position: f64,
  #[serde(default)]
  pub kp: Option<String>,
}

impl ToWireOn for OperationalPointPart {
  type Wire = railjson::OperationalPointPart;

  fn to_wire(&self, track: &TrackSection) -> railjson::OperationalPointPart {
    railjson::OperationalPointPart {
      track: track.label.clone(),
      position: self.position,
      extensions: self.kp.as_ref().map(|kp| railjson::OperationalPointPartExtensions {
        sncf: Some(railjson::OperationalPointPartSncfExtension { kp: kp.clone() }),
      }),
    }
  }
}
