//! RailJson wire format
//!
//! Serde types for the versioned exchange document consumed by simulation
//! and editing tools. Nothing in here knows about the in-memory model; the
//! model renders itself into these types (see [`crate::model`]).

mod common;
mod document;
mod objects;

pub use common::{
  ApplicableDirections, ApplicableDirectionsTrackRange, Curve, Direction, DirectionalTrackRange, Endpoint,
  GeometryType, LineString, Side, Slope, TrackEndpoint, WaypointRef, WaypointType,
};
pub use document::{CollectionCounts, RAILJSON_VERSION, RailJsonInfra, VersionCompatibility, schema_version};
pub use objects::{
  BufferStop, ConditionalParameters, Detector, Electrification, ExtendedSwitchType, LogicalSignal, NeutralSection,
  OperationalPoint, OperationalPointExtensions, OperationalPointIdentifierExtension, OperationalPointPart,
  OperationalPointPartExtensions, OperationalPointPartSncfExtension, OperationalPointSncfExtension, Route, Signal,
  SignalExtensions, SignalSncfExtension, SpeedSection, Switch, SwitchPortConnection, TrackSection,
  TrackSectionExtensions, TrackSectionSncfExtension,
};
