//! railjson-gen: build railway infrastructure models and export them as RailJson
//!
//! The [`model`] module holds the in-memory infrastructure, [`railjson`] the
//! versioned wire schema, and [`checks`] the validation passes run before an
//! export. [`io`] reads descriptions and writes documents.
//!
//! ```rust,ignore
//! use railjson_gen::model::{Infra, OperationalPoint, TrackSection};
//!
//! let mut infra = Infra::new();
//! let op = OperationalPoint::new("OP1", "ZZ", 1);
//! let track = infra.add_track_section(TrackSection::new("T1", 1000.0));
//! track.add_detector("D1", 100.0);
//! op.add_part(track, 500.0);
//! infra.add_operational_point(op);
//!
//! let document = infra.to_wire();
//! assert!(infra.find_duplicates().is_empty());
//! ```

pub mod checks;
pub mod core;
pub mod io;
pub mod model;
pub mod railjson;

pub use crate::core::error::{InfraError, InfraResult};
pub use crate::model::Infra;
pub use crate::railjson::{RAILJSON_VERSION, RailJsonInfra};
