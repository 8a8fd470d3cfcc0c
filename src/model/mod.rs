//! In-memory infrastructure model
//!
//! Entities are plain data populated once by a generator (or loaded from a
//! description file) and only read afterwards. Each renders itself to its
//! RailJson counterpart through [`ToWire`], or [`ToWireOn`] for objects that
//! live on a track and need the track's identity.

mod infra;
mod operational_point;
mod ranges;
mod route;
mod switch;
mod track_section;
mod waypoint;

pub use infra::{Infra, InfraObject};
pub use operational_point::{OperationalPoint, OperationalPointPart};
pub use ranges::{Electrification, NeutralSection, SpeedSection};
pub use route::Route;
pub use switch::{Switch, SwitchType};
pub use track_section::TrackSection;
pub use waypoint::{BufferStop, DEFAULT_SIGHT_DISTANCE, Detector, Signal, Waypoint};

/// Rendering of a top-level entity to its wire form
pub trait ToWire {
  type Wire;

  fn to_wire(&self) -> Self::Wire;
}

/// Rendering of a track-owned entity; the owning track is required
pub trait ToWireOn {
  type Wire;

  fn to_wire(&self, track: &TrackSection) -> Self::Wire;
}
