//! The RailJson infrastructure document and its schema version

use super::objects::{
  BufferStop, Detector, Electrification, ExtendedSwitchType, NeutralSection, OperationalPoint, Route, Signal,
  SpeedSection, Switch, TrackSection,
};
use crate::core::error::InfraResult;
use serde::{Deserialize, Serialize};

/// Version of the RailJson schema produced by this build.
///
/// Bumped only when the shape of the document changes. Stored records
/// carry their own version field, rewritten by the persistence layer's
/// migrations; this constant is never mutated at runtime.
pub const RAILJSON_VERSION: &str = "3.4.12";

const SCHEMA_VERSION: semver::Version = semver::Version::new(3, 4, 12);

/// [`RAILJSON_VERSION`] as a semver value
pub fn schema_version() -> semver::Version {
  SCHEMA_VERSION
}

/// A complete RailJson infrastructure document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailJsonInfra {
  pub version: String,
  pub track_sections: Vec<TrackSection>,
  pub switches: Vec<Switch>,
  pub routes: Vec<Route>,
  pub signals: Vec<Signal>,
  pub buffer_stops: Vec<BufferStop>,
  pub detectors: Vec<Detector>,
  pub operational_points: Vec<OperationalPoint>,
  pub extended_switch_types: Vec<ExtendedSwitchType>,
  pub speed_sections: Vec<SpeedSection>,
  pub electrifications: Vec<Electrification>,
  pub neutral_sections: Vec<NeutralSection>,
}

impl RailJsonInfra {
  /// Number of entries in each collection, in document order
  pub fn counts(&self) -> CollectionCounts {
    CollectionCounts {
      track_sections: self.track_sections.len(),
      switches: self.switches.len(),
      routes: self.routes.len(),
      signals: self.signals.len(),
      buffer_stops: self.buffer_stops.len(),
      detectors: self.detectors.len(),
      operational_points: self.operational_points.len(),
      extended_switch_types: self.extended_switch_types.len(),
      speed_sections: self.speed_sections.len(),
      electrifications: self.electrifications.len(),
      neutral_sections: self.neutral_sections.len(),
    }
  }

  /// How this document's version relates to the current schema
  pub fn compatibility(&self) -> InfraResult<VersionCompatibility> {
    VersionCompatibility::of(&self.version)
  }
}

/// Per-collection entry counts, used by command summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CollectionCounts {
  pub track_sections: usize,
  pub switches: usize,
  pub routes: usize,
  pub signals: usize,
  pub buffer_stops: usize,
  pub detectors: usize,
  pub operational_points: usize,
  pub extended_switch_types: usize,
  pub speed_sections: usize,
  pub electrifications: usize,
  pub neutral_sections: usize,
}

impl CollectionCounts {
  /// `(collection name, count)` pairs in document order
  pub fn entries(&self) -> [(&'static str, usize); 11] {
    [
      ("track_sections", self.track_sections),
      ("switches", self.switches),
      ("routes", self.routes),
      ("signals", self.signals),
      ("buffer_stops", self.buffer_stops),
      ("detectors", self.detectors),
      ("operational_points", self.operational_points),
      ("extended_switch_types", self.extended_switch_types),
      ("speed_sections", self.speed_sections),
      ("electrifications", self.electrifications),
      ("neutral_sections", self.neutral_sections),
    ]
  }
}

/// Relation between a document's version and [`RAILJSON_VERSION`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionCompatibility {
  /// Same version as this build
  Current,
  /// Same major version, different minor/patch
  Compatible,
  /// Different major version
  Incompatible,
}

impl VersionCompatibility {
  pub fn of(version: &str) -> InfraResult<Self> {
    let found = semver::Version::parse(version)?;
    let current = schema_version();

    Ok(if found == current {
      VersionCompatibility::Current
    } else if found.major == current.major {
      VersionCompatibility::Compatible
    } else {
      VersionCompatibility::Incompatible
    })
  }
}
